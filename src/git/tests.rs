// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Builders and parsers against a real git binary.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use super::command;
use super::parse;
use super::runner::DEFAULT_ENV;
use super::version::GitVersion;

/// Runs `git ARGS` in `repo` with the runner's default environment.
fn git(repo: &Path, args: &[String]) -> Vec<u8> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .envs(DEFAULT_ENV)
        .output()
        .expect("git should be installed");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output.stdout
}

fn sh_git(repo: &Path, args: &[&str]) {
    let args: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
    git(repo, &args);
}

/// Repo with one commit on `main` and an identity configured.
fn init_repo() -> TempDir {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let repo = temp.path();
    sh_git(repo, &["init", "--quiet"]);
    sh_git(repo, &["config", "user.email", "test@example.com"]);
    sh_git(repo, &["config", "user.name", "Test"]);
    sh_git(repo, &["config", "commit.gpgsign", "false"]);
    sh_git(repo, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    std::fs::write(repo.join("tracked.txt"), "one\n").unwrap();
    sh_git(repo, &["add", "tracked.txt"]);
    sh_git(repo, &["commit", "-q", "-m", "Initial commit"]);
    temp
}

#[test]
fn test_version_of_installed_git() {
    let out = Command::new("git").args(command::version()).output().unwrap();
    let version = GitVersion::parse(&String::from_utf8_lossy(&out.stdout)).unwrap();
    assert!(version.major >= 2);
}

#[test]
fn test_status_of_real_repo() {
    let temp = init_repo();
    let repo = temp.path();
    std::fs::write(repo.join("tracked.txt"), "two\n").unwrap();
    std::fs::write(repo.join("staged.txt"), "s\n").unwrap();
    std::fs::write(repo.join("untracked file.txt"), "u\n").unwrap();
    git(repo, &command::stage(&["staged.txt".to_string()]));
    sh_git(repo, &["mv", "tracked.txt", "renamed.txt"]);

    let status = parse::parse_status(&git(repo, &command::status()));

    let branch = status.branch.as_ref().unwrap();
    assert_eq!(branch.name.as_deref(), Some("main"));
    assert!(branch.head_oid.is_some());
    assert_eq!(branch.upstream, None);

    let rename = status
        .staged
        .iter()
        .find(|c| c.path == "renamed.txt")
        .expect("rename is staged");
    assert_eq!(rename.orig_path.as_deref(), Some("tracked.txt"));
    assert!(status.staged.iter().any(|c| c.path == "staged.txt"));
    // content change after the move is still unstaged
    assert!(status.unstaged.iter().any(|c| c.path == "renamed.txt"));
    let untracked: Vec<_> = status.untracked.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(untracked, ["untracked file.txt"]);
}

#[test]
fn test_log_branches_tags_and_stash() {
    let temp = init_repo();
    let repo = temp.path();
    std::fs::write(repo.join("tracked.txt"), "two\n").unwrap();
    git(repo, &command::stage(&["tracked.txt".to_string()]));
    git(repo, &command::commit("Second", false));

    let commits = parse::parse_log(&git(repo, &command::log(10)));
    assert_eq!(commits.len(), 2);
    assert_eq!(commits[1].subject, "Initial commit");
    assert!(commits[1].parents.is_empty());
    assert_eq!(commits[0].parents, [commits[1].oid.clone()]);
    assert_eq!(commits[0].author_email, "test@example.com");

    git(repo, &command::create_branch("feature", command::DEFAULT_FROM_REF));
    let branches = parse::parse_branches(&git(repo, &command::branches()));
    let current: Vec<_> = branches.iter().filter(|b| b.is_current).map(|b| b.name.as_str()).collect();
    assert_eq!(current, ["feature"]);
    assert_eq!(branches.len(), 2);

    git(repo, &command::create_tag("v1.0", None));
    git(repo, &command::create_tag("v0.9", Some("HEAD~1")));
    let tags = parse::parse_tags(&git(repo, &command::tags()));
    let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["v0.9", "v1.0"]);

    std::fs::write(repo.join("tracked.txt"), "dirty\n").unwrap();
    git(repo, &command::stash_save(Some("wip"), false));
    let stashes = parse::parse_stashes(&git(repo, &command::stash_list()));
    assert_eq!(stashes.len(), 1);
    assert_eq!(stashes[0].selector, "stash@{0}");
    assert!(stashes[0].summary.ends_with("wip"));
}

#[test]
fn test_remotes_and_remote_branches() {
    let upstream = init_repo();
    let temp = init_repo();
    let repo = temp.path();
    let url = upstream.path().to_string_lossy().into_owned();

    git(repo, &command::add_remote("origin", &url));
    git(repo, &command::fetch());
    let remotes = parse::parse_remotes(&git(repo, &command::remotes()));
    assert_eq!(remotes.len(), 1);
    assert_eq!(remotes[0].fetch_url.as_deref(), Some(url.as_str()));
    assert_eq!(remotes[0].push_url.as_deref(), Some(url.as_str()));

    let remote_branches = parse::parse_remote_branches(&git(repo, &command::remote_branches()));
    let names: Vec<_> = remote_branches.iter().map(|b| b.full_name.as_str()).collect();
    assert_eq!(names, ["origin/main"]);

    git(repo, &command::set_upstream("origin/main", None));
    let branches = parse::parse_branches(&git(repo, &command::branches()));
    assert_eq!(branches[0].upstream.as_deref(), Some("origin/main"));
}

#[test]
fn test_work_tree_check_and_diff() {
    let temp = init_repo();
    let repo = temp.path();
    assert_eq!(git(repo, &command::is_inside_work_tree()), b"true\n");

    std::fs::write(repo.join("tracked.txt"), "changed\n").unwrap();
    let diff = parse::parse_diff(&git(repo, &command::diff_file("tracked.txt", false)));
    assert!(diff.contains("+changed"));
    let staged = git(repo, &command::diff_file("tracked.txt", true));
    assert!(staged.is_empty());
    assert!(parse::parse_conflicts(&git(repo, &command::conflicts())).is_empty());
}
