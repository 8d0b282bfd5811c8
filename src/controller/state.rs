// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The single mutable aggregate behind every view.
//!
//! Fields change only through setters. Each setter notifies subscribers with
//! the [`StateChange`] naming the field, after the value is stored.

use std::path::{Path, PathBuf};

use crate::core::observer::{Observers, SubscriptionId};
use crate::error::RepoError;
use crate::git::GitVersion;
use crate::git::model::{Branch, Commit, Remote, RemoteBranch, RepoStatus, StashEntry, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateChange {
    RepoPath,
    Status,
    Log,
    Branches,
    RemoteBranches,
    Stashes,
    Tags,
    Remotes,
    Conflicts,
    DiffText,
    GitVersion,
    Error,
    Busy,
}

#[derive(Debug, Default)]
pub struct RepoState {
    repo_path: Option<PathBuf>,
    status: Option<RepoStatus>,
    log: Option<Vec<Commit>>,
    branches: Option<Vec<Branch>>,
    remote_branches: Option<Vec<RemoteBranch>>,
    stashes: Option<Vec<StashEntry>>,
    tags: Option<Vec<Tag>>,
    remotes: Option<Vec<Remote>>,
    conflicts: Option<Vec<String>>,
    diff_text: Option<String>,
    git_version: Option<GitVersion>,
    last_error: Option<RepoError>,
    busy: bool,
    observers: Observers<StateChange>,
}

macro_rules! setter {
    ($(#[$doc:meta])* $name:ident, $field:ident: $ty:ty => $change:ident) => {
        $(#[$doc])*
        pub fn $name(&mut self, value: $ty) {
            self.$field = Some(value);
            self.observers.emit(&StateChange::$change);
        }
    };
}

impl RepoState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // --- Getters ---

    #[must_use]
    pub fn repo_path(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }

    #[must_use]
    pub const fn status(&self) -> Option<&RepoStatus> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn log(&self) -> Option<&[Commit]> {
        self.log.as_deref()
    }

    #[must_use]
    pub fn branches(&self) -> Option<&[Branch]> {
        self.branches.as_deref()
    }

    #[must_use]
    pub fn remote_branches(&self) -> Option<&[RemoteBranch]> {
        self.remote_branches.as_deref()
    }

    #[must_use]
    pub fn stashes(&self) -> Option<&[StashEntry]> {
        self.stashes.as_deref()
    }

    #[must_use]
    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    #[must_use]
    pub fn remotes(&self) -> Option<&[Remote]> {
        self.remotes.as_deref()
    }

    #[must_use]
    pub fn conflicts(&self) -> Option<&[String]> {
        self.conflicts.as_deref()
    }

    #[must_use]
    pub fn diff_text(&self) -> Option<&str> {
        self.diff_text.as_deref()
    }

    #[must_use]
    pub const fn git_version(&self) -> Option<GitVersion> {
        self.git_version
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&RepoError> {
        self.last_error.as_ref()
    }

    /// True while at least one command is outstanding.
    #[must_use]
    pub const fn busy(&self) -> bool {
        self.busy
    }

    // --- Setters ---

    setter!(set_repo_path, repo_path: PathBuf => RepoPath);
    setter!(set_status, status: RepoStatus => Status);
    setter!(set_log, log: Vec<Commit> => Log);
    setter!(set_branches, branches: Vec<Branch> => Branches);
    setter!(set_remote_branches, remote_branches: Vec<RemoteBranch> => RemoteBranches);
    setter!(set_stashes, stashes: Vec<StashEntry> => Stashes);
    setter!(set_tags, tags: Vec<Tag> => Tags);
    setter!(set_remotes, remotes: Vec<Remote> => Remotes);
    setter!(set_conflicts, conflicts: Vec<String> => Conflicts);
    setter!(set_diff_text, diff_text: String => DiffText);
    setter!(set_git_version, git_version: GitVersion => GitVersion);
    setter!(
        /// Replaces the last error.
        set_error, last_error: RepoError => Error
    );

    /// Sets the last error to none.
    pub fn clear_error(&mut self) {
        self.last_error = None;
        self.observers.emit(&StateChange::Error);
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.observers.emit(&StateChange::Busy);
    }
}
