// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cmd::render;
use crate::cmd::session::surface;
use crate::error::RepoError;
use crate::git::GitVersion;
use crate::git::model::{Branch, BranchInfo, Commit, FileChange, Remote, RepoStatus, StashEntry};

fn change(path: &str, x: &str, y: &str) -> FileChange {
    FileChange {
        path: path.to_string(),
        staged_status: x.to_string(),
        unstaged_status: y.to_string(),
        orig_path: None,
    }
}

#[test]
fn test_render_status_sections() {
    let mut renamed = change("new.rs", "R", ".");
    renamed.orig_path = Some("old.rs".to_string());
    let status = RepoStatus {
        branch: Some(BranchInfo {
            name: Some("main".to_string()),
            head_oid: Some("0123456789abcdef".to_string()),
            upstream: Some("origin/main".to_string()),
            ahead: 2,
            behind: 0,
        }),
        staged: vec![renamed],
        unstaged: vec![change("lib.rs", ".", "M")],
        untracked: vec![change("notes.txt", "?", "?")],
        conflicted: Vec::new(),
    };
    assert_eq!(
        render::status(&status),
        "On branch main [origin/main: ahead 2]\n\
         Staged:\n  R old.rs -> new.rs\n\
         Unstaged:\n  M lib.rs\n\
         Untracked:\n  ? notes.txt\n"
    );
}

#[test]
fn test_render_clean_detached_status() {
    let status = RepoStatus {
        branch: Some(BranchInfo {
            head_oid: Some("0123456789abcdef".to_string()),
            ..BranchInfo::default()
        }),
        ..RepoStatus::default()
    };
    assert_eq!(
        render::status(&status),
        "HEAD detached at 01234567\nnothing to commit, working tree clean\n"
    );
}

#[test]
fn test_render_log_line() {
    let commit = Commit {
        oid: "89abcdef01234567".to_string(),
        author_name: "Ada".to_string(),
        author_date: "2026-01-02T03:04:05+00:00".to_string(),
        subject: "Add parser".to_string(),
        ..Commit::default()
    };
    insta::assert_snapshot!(render::log(&[commit]).trim_end(), @"89abcdef 2026-01-02 Ada Add parser");
}

#[test]
fn test_render_branches() {
    let rows = [
        Branch {
            name: "main".to_string(),
            is_current: true,
            upstream: Some("origin/main".to_string()),
            ahead: 1,
            behind: 3,
            ..Branch::default()
        },
        Branch {
            name: "old".to_string(),
            upstream: Some("origin/old".to_string()),
            gone: true,
            ..Branch::default()
        },
        Branch {
            name: "local".to_string(),
            ..Branch::default()
        },
    ];
    assert_eq!(
        render::branches(&rows),
        "* main [origin/main: ahead 1, behind 3]\n  old [origin/old: gone]\n  local\n"
    );
}

#[test]
fn test_render_remotes_and_stashes() {
    let remotes = [Remote {
        name: "origin".to_string(),
        fetch_url: Some("https://example.com/a.git".to_string()),
        push_url: Some("ssh://example.com/a.git".to_string()),
    }];
    assert_eq!(
        render::remotes(&remotes),
        "origin\thttps://example.com/a.git (fetch)\norigin\tssh://example.com/a.git (push)\n"
    );

    let stashes = [StashEntry {
        selector: "stash@{0}".to_string(),
        summary: "WIP on main: 1234567 msg".to_string(),
        ..StashEntry::default()
    }];
    insta::assert_snapshot!(render::stashes(&stashes).trim_end(), @"stash@{0}: WIP on main: 1234567 msg");
}

#[test]
fn test_render_git_version_support() {
    let old = GitVersion::parse("git version 2.20.1").unwrap();
    let new = GitVersion::parse("git version 2.45.0").unwrap();
    insta::assert_snapshot!(render::git_version(&new).trim_end(), @"git 2.45.0");
    insta::assert_snapshot!(
        render::git_version(&old).trim_end(),
        @"git 2.20.1 (unsupported, 2.23 or newer required)"
    );
}

#[test]
fn test_surface_appends_stderr_and_hint() {
    let err = RepoError::CommandFailed {
        args: vec!["git".to_string(), "push".to_string()],
        exit_code: 128,
        stdout: Vec::new(),
        stderr: b"fatal: The current branch topic has no upstream branch.\n".to_vec(),
    };
    assert_eq!(
        surface(&err).to_string(),
        "command failed (128): git push\n\
         fatal: The current branch topic has no upstream branch.\n\
         hint: set one with `gitdeck push -u <remote> <branch>`"
    );
}

#[test]
fn test_surface_plain_error() {
    let err = RepoError::not_a_repo("/tmp/x");
    insta::assert_snapshot!(surface(&err).to_string(), @"not a git repository: /tmp/x");
}
