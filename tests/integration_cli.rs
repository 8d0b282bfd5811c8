// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Runs the `gitdeck` binary against temporary repositories.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_git(args: &[&str], cwd: &Path) {
    let status = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .status()
        .expect("git should be installed");
    assert!(status.success(), "git {args:?} failed");
}

fn init_repo() -> TempDir {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let repo = temp.path();
    run_git(&["init", "--quiet"], repo);
    run_git(&["config", "user.email", "test@example.com"], repo);
    run_git(&["config", "user.name", "Test"], repo);
    run_git(&["config", "commit.gpgsign", "false"], repo);
    run_git(&["symbolic-ref", "HEAD", "refs/heads/main"], repo);
    std::fs::write(repo.join("a.txt"), "a\n").unwrap();
    run_git(&["add", "a.txt"], repo);
    run_git(&["commit", "-q", "-m", "First"], repo);
    temp
}

/// Runs gitdeck from `cwd` so no stray `gitdeck.toml` is picked up.
fn gitdeck(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gitdeck"))
        .args(args)
        .current_dir(cwd)
        .env_remove("GITDECK_GIT__EXECUTABLE")
        .env_remove("GITDECK_LOG")
        .output()
        .expect("gitdeck binary should run")
}

#[test]
fn cli_version_prints_package_version() {
    let temp = tempfile::tempdir().unwrap();
    let out = gitdeck(temp.path(), &["version"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        env!("CARGO_PKG_VERSION")
    );
}

#[test]
fn cli_status_json() {
    let temp = init_repo();
    std::fs::write(temp.path().join("new.txt"), "n\n").unwrap();

    let out = gitdeck(temp.path(), &["status", "--json"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let status: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(status["branch"]["name"], "main");
    assert_eq!(status["untracked"][0]["path"], "new.txt");
}

#[test]
fn cli_json_flag_logs_json_lines() {
    let temp = init_repo();
    let out = gitdeck(temp.path(), &["--json", "-l", "4", "status"]);
    assert!(out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    let events: Vec<serde_json::Value> = stderr
        .lines()
        .map(|line| serde_json::from_str(line).expect("each log line is JSON"))
        .collect();
    assert!(
        events
            .iter()
            .any(|event| event["fields"]["message"] == "dispatched"),
        "{stderr}"
    );
}

#[test]
fn cli_commit_then_log() {
    let temp = init_repo();
    let repo = temp.path();
    std::fs::write(repo.join("a.txt"), "changed\n").unwrap();

    let repo_arg = repo.to_str().unwrap();
    assert!(gitdeck(repo, &["-C", repo_arg, "stage", "a.txt"]).status.success());
    assert!(gitdeck(repo, &["-C", repo_arg, "commit", "-m", "Second"]).status.success());

    let out = gitdeck(repo, &["log", "-n", "1"]);
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert_eq!(text.lines().count(), 1);
    assert!(text.trim_end().ends_with("Test Second"));
}

#[test]
fn cli_outside_repo_fails() {
    let temp = tempfile::tempdir().unwrap();
    let plain = temp.path().join("plain");
    std::fs::create_dir(&plain).unwrap();

    let out = gitdeck(&plain, &["status"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error:"));
}

#[test]
fn cli_push_without_branch_is_rejected() {
    let temp = init_repo();
    let out = gitdeck(temp.path(), &["push", "-u", "origin"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("remote and branch are required"));
}

#[test]
fn cli_invalid_config_file_fails() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("gitdeck.toml"), "[git]\nlog_limit = 0\n").unwrap();

    let out = gitdeck(temp.path(), &["options"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("log_limit"));
}

#[test]
fn cli_options_reflect_flags() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("gitdeck.toml"), "[git]\nlog_limit = 42\n").unwrap();

    let out = gitdeck(temp.path(), &["--log-level", "1", "options"]);
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.lines().any(|l| l == "git.log_limit         = 42"));
    assert!(text.lines().any(|l| l == "global.log_level      = 1"));
}
