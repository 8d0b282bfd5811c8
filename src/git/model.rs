// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Immutable snapshots produced by the output parsers.
//!
//! Each snapshot replaces the previous one wholesale on refresh.

use serde::Serialize;

/// One path in `git status` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChange {
    pub path: String,
    /// X code (index vs HEAD), `.` when unchanged.
    pub staged_status: String,
    /// Y code (worktree vs index), `.` when unchanged.
    pub unstaged_status: String,
    /// Source path of a rename or copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_path: Option<String>,
}

/// Branch header of `git status --porcelain=v2 -b`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BranchInfo {
    /// None when detached or unknown.
    pub name: Option<String>,
    /// None before the first commit.
    pub head_oid: Option<String>,
    pub upstream: Option<String>,
    pub ahead: u32,
    pub behind: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepoStatus {
    pub branch: Option<BranchInfo>,
    pub staged: Vec<FileChange>,
    pub unstaged: Vec<FileChange>,
    pub untracked: Vec<FileChange>,
    pub conflicted: Vec<FileChange>,
}

impl RepoStatus {
    /// True when there is nothing to stage, commit or resolve.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty()
            && self.unstaged.is_empty()
            && self.untracked.is_empty()
            && self.conflicted.is_empty()
    }
}

/// One row of `git branch --format=...`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Branch {
    pub name: String,
    pub is_current: bool,
    pub upstream: Option<String>,
    pub ahead: u32,
    pub behind: u32,
    /// Upstream configured but deleted on the remote.
    pub gone: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteBranch {
    pub remote: String,
    pub name: String,
    /// `remote/name` as printed by git.
    pub full_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub oid: String,
    pub parents: Vec<String>,
    pub author_name: String,
    pub author_email: String,
    /// ISO-8601 as printed by `--date=iso-strict`.
    pub author_date: String,
    pub subject: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StashEntry {
    pub oid: String,
    /// e.g. `stash@{0}`
    pub selector: String,
    pub summary: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remote {
    pub name: String,
    pub fetch_url: Option<String>,
    pub push_url: Option<String>,
}
