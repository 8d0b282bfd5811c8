// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git status --porcelain=v2 -b -z`
//!
//! ```text
//! # branch.oid <sha> | (initial)
//! # branch.head <name> | (detached)
//! # branch.upstream <ref>
//! # branch.ab +<ahead> -<behind>
//! 1 XY sub mH mI mW hH hI <path>
//! 2 XY sub mH mI mW hH hI Xscore <path> NUL <origPath>
//! u XY sub m1 m2 m3 mW h1 h2 h3 <path>
//! ? <path>
//! ! <path>                                  (skipped)
//! ```

use std::borrow::Cow;

use crate::git::model::{BranchInfo, FileChange, RepoStatus};

/// Header values that mean "not available".
const ABSENT_OID: [&str; 2] = ["(initial)", "(unknown)"];
const ABSENT_HEAD: [&str; 2] = ["(detached)", "(unknown)"];

#[derive(Default)]
struct Header {
    seen: bool,
    name: Option<String>,
    oid: Option<String>,
    upstream: Option<String>,
    ahead: u32,
    behind: u32,
}

impl Header {
    fn apply(&mut self, line: &str) {
        self.seen = true;
        let mut parts = line.splitn(3, ' ');
        let (Some(_), Some(key), Some(value)) = (parts.next(), parts.next(), parts.next()) else {
            return;
        };
        match key {
            "branch.oid" if !ABSENT_OID.contains(&value) => self.oid = Some(value.to_string()),
            "branch.head" if !ABSENT_HEAD.contains(&value) => self.name = Some(value.to_string()),
            "branch.upstream" => self.upstream = Some(value.to_string()),
            "branch.ab" => {
                for token in value.split_whitespace() {
                    if let Some(n) = token.strip_prefix('+') {
                        self.ahead = n.parse().unwrap_or(0);
                    } else if let Some(n) = token.strip_prefix('-') {
                        self.behind = n.parse().unwrap_or(0);
                    }
                }
            }
            _ => {}
        }
    }

    fn into_branch(self) -> Option<BranchInfo> {
        let any = self.seen
            || self.name.is_some()
            || self.oid.is_some()
            || self.upstream.is_some()
            || self.ahead > 0
            || self.behind > 0;
        any.then(|| BranchInfo {
            name: self.name,
            head_oid: self.oid,
            upstream: self.upstream,
            ahead: self.ahead,
            behind: self.behind,
        })
    }
}

/// Staged and unstaged codes from an XY pair; `.`/`.` if it is too short.
fn split_xy(xy: &str) -> (String, String) {
    let mut chars = xy.chars();
    match (chars.next(), chars.next()) {
        (Some(x), Some(y)) => (x.to_string(), y.to_string()),
        _ => (".".to_string(), ".".to_string()),
    }
}

fn change(xy: &str, path: &str, orig_path: Option<String>) -> FileChange {
    let (staged_status, unstaged_status) = split_xy(xy);
    FileChange {
        path: path.to_string(),
        staged_status,
        unstaged_status,
        orig_path,
    }
}

/// XY pair (field 1, if present) and the path (field `index`, the remainder).
fn xy_and_path(line: &str, index: usize) -> (Option<&str>, &str) {
    let parts: Vec<&str> = line.splitn(index + 1, ' ').collect();
    (
        parts.get(1).copied(),
        parts.get(index).copied().unwrap_or(""),
    )
}

fn classify(status: &mut RepoStatus, change: FileChange) {
    let staged = change.staged_status != ".";
    let unstaged = change.unstaged_status != ".";
    if staged && unstaged {
        status.staged.push(change.clone());
        status.unstaged.push(change);
    } else if staged {
        status.staged.push(change);
    } else if unstaged {
        status.unstaged.push(change);
    }
}

#[must_use]
pub fn parse_status(payload: &[u8]) -> RepoStatus {
    let mut status = RepoStatus::default();
    let mut header = Header::default();

    let mut records = payload.split(|&b| b == 0).peekable();
    while let Some(record) = records.next() {
        if record.is_empty() {
            continue;
        }
        let line: Cow<'_, str> = String::from_utf8_lossy(record);

        if line.starts_with("# ") {
            header.apply(&line);
            continue;
        }

        match line.chars().next() {
            Some('1') => {
                let (xy, path) = xy_and_path(&line, 8);
                classify(&mut status, change(xy.unwrap_or(".."), path, None));
            }
            Some('2') => {
                let (xy, path) = xy_and_path(&line, 9);
                // the source path is the next NUL record
                let orig_path = records
                    .next_if(|next| !next.is_empty())
                    .map(|next| String::from_utf8_lossy(next).into_owned());
                classify(&mut status, change(xy.unwrap_or(".."), path, orig_path));
            }
            Some('u') => {
                let (xy, path) = xy_and_path(&line, 10);
                status
                    .conflicted
                    .push(change(xy.unwrap_or("UU"), path, None));
            }
            Some('?') => {
                status.untracked.push(FileChange {
                    path: line.chars().skip(2).collect(),
                    staged_status: "?".to_string(),
                    unstaged_status: "?".to_string(),
                    orig_path: None,
                });
            }
            _ => {}
        }
    }

    status.branch = header.into_branch();
    status
}
