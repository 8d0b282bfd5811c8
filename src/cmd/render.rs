// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plain-text and JSON rendering of repository state.

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::Result;
use crate::git::GitVersion;
use crate::git::model::{
    Branch, BranchInfo, Commit, FileChange, Remote, RemoteBranch, RepoStatus, StashEntry, Tag,
};

/// Abbreviated object id length.
const SHORT_OID: usize = 8;

/// Where rendered values go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    json: bool,
}

impl Output {
    #[must_use]
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Prints `value` as pretty JSON, or through `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn emit<T: Serialize + ?Sized>(&self, value: &T, text: fn(&T) -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            let rendered = text(value);
            if !rendered.is_empty() {
                print!("{rendered}");
            }
        }
        Ok(())
    }
}

fn short(oid: &str) -> &str {
    oid.get(..SHORT_OID).unwrap_or(oid)
}

fn tracking(upstream: Option<&str>, ahead: u32, behind: u32) -> String {
    let Some(upstream) = upstream else {
        return String::new();
    };
    let counts = match (ahead, behind) {
        (0, 0) => String::new(),
        (a, 0) => format!(": ahead {a}"),
        (0, b) => format!(": behind {b}"),
        (a, b) => format!(": ahead {a}, behind {b}"),
    };
    format!(" [{upstream}{counts}]")
}

fn branch_line(info: &BranchInfo) -> String {
    let head = match (&info.name, &info.head_oid) {
        (Some(name), _) => format!("On branch {name}"),
        (None, Some(oid)) => format!("HEAD detached at {}", short(oid)),
        (None, None) => "No commits yet".to_string(),
    };
    format!(
        "{head}{}\n",
        tracking(info.upstream.as_deref(), info.ahead, info.behind)
    )
}

fn change_section(out: &mut String, title: &str, changes: &[FileChange], code: fn(&FileChange) -> &str) {
    if changes.is_empty() {
        return;
    }
    let _ = writeln!(out, "{title}:");
    for change in changes {
        let _ = match &change.orig_path {
            Some(orig) => writeln!(out, "  {} {orig} -> {}", code(change), change.path),
            None => writeln!(out, "  {} {}", code(change), change.path),
        };
    }
}

#[must_use]
pub fn status(status: &RepoStatus) -> String {
    let mut out = status.branch.as_ref().map(branch_line).unwrap_or_default();
    if status.is_clean() {
        out.push_str("nothing to commit, working tree clean\n");
        return out;
    }
    change_section(&mut out, "Conflicted", &status.conflicted, |c| c.staged_status.as_str());
    change_section(&mut out, "Staged", &status.staged, |c| c.staged_status.as_str());
    change_section(&mut out, "Unstaged", &status.unstaged, |c| c.unstaged_status.as_str());
    change_section(&mut out, "Untracked", &status.untracked, |_| "?");
    out
}

#[must_use]
pub fn log(commits: &[Commit]) -> String {
    commits.iter().fold(String::new(), |mut out, c| {
        let date = c.author_date.get(..10).unwrap_or(c.author_date.as_str());
        let _ = writeln!(out, "{} {date} {} {}", short(&c.oid), c.author_name, c.subject);
        out
    })
}

#[must_use]
pub fn branches(branches: &[Branch]) -> String {
    branches.iter().fold(String::new(), |mut out, b| {
        let marker = if b.is_current { '*' } else { ' ' };
        let upstream = if b.gone {
            b.upstream.as_ref().map(|u| format!(" [{u}: gone]")).unwrap_or_default()
        } else {
            tracking(b.upstream.as_deref(), b.ahead, b.behind)
        };
        let _ = writeln!(out, "{marker} {}{upstream}", b.name);
        out
    })
}

#[must_use]
pub fn remote_branches(branches: &[RemoteBranch]) -> String {
    branches.iter().fold(String::new(), |mut out, b| {
        let _ = writeln!(out, "{}", b.full_name);
        out
    })
}

#[must_use]
pub fn stashes(stashes: &[StashEntry]) -> String {
    stashes.iter().fold(String::new(), |mut out, s| {
        let _ = writeln!(out, "{}: {}", s.selector, s.summary);
        out
    })
}

#[must_use]
pub fn tags(tags: &[Tag]) -> String {
    tags.iter().fold(String::new(), |mut out, t| {
        let _ = writeln!(out, "{}", t.name);
        out
    })
}

#[must_use]
pub fn remotes(remotes: &[Remote]) -> String {
    remotes.iter().fold(String::new(), |mut out, r| {
        for (url, kind) in [(&r.fetch_url, "fetch"), (&r.push_url, "push")] {
            if let Some(url) = url {
                let _ = writeln!(out, "{}\t{url} ({kind})", r.name);
            }
        }
        out
    })
}

#[must_use]
pub fn paths(paths: &[String]) -> String {
    paths.iter().fold(String::new(), |mut out, p| {
        let _ = writeln!(out, "{p}");
        out
    })
}

#[must_use]
pub fn diff(text: &str) -> String {
    text.to_string()
}

#[must_use]
pub fn git_version(version: &GitVersion) -> String {
    if version.is_supported() {
        format!("git {version}\n")
    } else {
        format!("git {version} (unsupported, 2.23 or newer required)\n")
    }
}
