// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logical operations the controller can dispatch.
//!
//! ```text
//! Intent --key()------> queue coalescing key
//!        --priority()-> USER | BACKGROUND
//!        --git_args()-> argv (command.rs)
//!        --refresh()--> follow-ups enqueued on success
//! ```

use std::path::PathBuf;

use bitflags::bitflags;

use crate::core::process::RunHandle;
use crate::core::queue::Priority;
use crate::error::RepoError;
use crate::git::command;

bitflags! {
    /// Views reloaded after an intent succeeds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Refresh: u8 {
        const STATUS = 0x01;
        const BRANCHES = 0x02;
        const LOG = 0x04;
        const STASHES = 0x08;
        const TAGS = 0x10;
        const REMOTES = 0x20;
        const REMOTE_BRANCHES = 0x40;
    }
}

/// One logical git operation, carrying what its completion needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// `rev-parse --is-inside-work-tree` in `path`; adopts it on `true`.
    ValidateRepo { path: PathBuf },
    RefreshStatus,
    RefreshLog { limit: usize },
    RefreshBranches,
    RefreshRemoteBranches,
    RefreshConflicts,
    RefreshStashes,
    RefreshTags,
    RefreshRemotes,
    Diff { path: String, staged: bool },
    Stage { paths: Vec<String> },
    Unstage { paths: Vec<String> },
    Discard { paths: Vec<String> },
    Commit { message: String, amend: bool },
    Fetch,
    Pull,
    Push {
        set_upstream: bool,
        remote: Option<String>,
        branch: Option<String>,
    },
    SwitchBranch { name: String },
    CreateBranch { name: String, from_ref: String },
    DeleteBranch { name: String, force: bool },
    DeleteRemoteBranch { remote: String, name: String },
    SetUpstream { upstream: String, branch: Option<String> },
    StashSave {
        message: Option<String>,
        include_untracked: bool,
    },
    StashApply { selector: Option<String> },
    StashPop { selector: Option<String> },
    StashDrop { selector: Option<String> },
    CreateTag { name: String, target: Option<String> },
    DeleteTag { name: String },
    PushTag { remote: String, name: String },
    PushTags { remote: String },
    AddRemote { name: String, url: String },
    RemoveRemote { name: String },
    SetRemoteUrl { name: String, url: String },
    GitVersion,
}

impl Intent {
    /// Queue coalescing key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::ValidateRepo { .. } => "open_repo",
            Self::RefreshStatus => "refresh_status",
            Self::RefreshLog { .. } => "refresh_log",
            Self::RefreshBranches => "refresh_branches",
            Self::RefreshRemoteBranches => "refresh_remote_branches",
            Self::RefreshConflicts => "refresh_conflicts",
            Self::RefreshStashes => "refresh_stashes",
            Self::RefreshTags => "refresh_tags",
            Self::RefreshRemotes => "refresh_remotes",
            Self::Diff { .. } => "diff",
            Self::Stage { .. } => "stage",
            Self::Unstage { .. } => "unstage",
            Self::Discard { .. } => "discard",
            Self::Commit { .. } => "commit",
            Self::Fetch => "fetch",
            Self::Pull => "pull",
            Self::Push { .. } => "push",
            Self::SwitchBranch { .. } => "switch_branch",
            Self::CreateBranch { .. } => "create_branch",
            Self::DeleteBranch { .. } => "delete_branch",
            Self::DeleteRemoteBranch { .. } => "delete_remote_branch",
            Self::SetUpstream { .. } => "set_upstream",
            Self::StashSave { .. } => "stash_save",
            Self::StashApply { .. } => "stash_apply",
            Self::StashPop { .. } => "stash_pop",
            Self::StashDrop { .. } => "stash_drop",
            Self::CreateTag { .. } => "create_tag",
            Self::DeleteTag { .. } => "delete_tag",
            Self::PushTag { .. } => "push_tag",
            Self::PushTags { .. } => "push_tags",
            Self::AddRemote { .. } => "add_remote",
            Self::RemoveRemote { .. } => "remove_remote",
            Self::SetRemoteUrl { .. } => "set_remote_url",
            Self::GitVersion => "git_version",
        }
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        match self {
            Self::RefreshStatus
            | Self::RefreshLog { .. }
            | Self::RefreshBranches
            | Self::RefreshRemoteBranches
            | Self::RefreshConflicts
            | Self::RefreshStashes
            | Self::RefreshTags
            | Self::RefreshRemotes => Priority::Background,
            _ => Priority::User,
        }
    }

    /// Follow-up refreshes on success.
    ///
    /// For [`Intent::ValidateRepo`] this only applies when the path turned
    /// out to be a work tree.
    #[must_use]
    pub const fn refresh(&self) -> Refresh {
        match self {
            Self::ValidateRepo { .. }
            | Self::Stage { .. }
            | Self::Unstage { .. }
            | Self::Discard { .. }
            | Self::Pull
            | Self::StashApply { .. } => Refresh::STATUS,
            Self::Commit { .. } => Refresh::STATUS.union(Refresh::LOG),
            Self::Fetch
            | Self::Push { .. }
            | Self::DeleteBranch { .. }
            | Self::SetUpstream { .. } => Refresh::BRANCHES,
            Self::SwitchBranch { .. } | Self::CreateBranch { .. } => {
                Refresh::STATUS.union(Refresh::BRANCHES)
            }
            Self::StashSave { .. } | Self::StashPop { .. } => {
                Refresh::STATUS.union(Refresh::STASHES)
            }
            Self::StashDrop { .. } => Refresh::STASHES,
            Self::CreateTag { .. } | Self::DeleteTag { .. } => Refresh::TAGS,
            Self::AddRemote { .. } | Self::RemoveRemote { .. } | Self::SetRemoteUrl { .. } => {
                Refresh::REMOTES
            }
            Self::DeleteRemoteBranch { .. } => Refresh::REMOTE_BRANCHES,
            _ => Refresh::empty(),
        }
    }

    /// Whether the intent runs inside the current repository.
    #[must_use]
    pub const fn needs_repo(&self) -> bool {
        !matches!(self, Self::ValidateRepo { .. } | Self::GitVersion)
    }

    /// Git arguments, without the program.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::Precondition`] for a push that sets the upstream
    /// without a remote and branch.
    pub fn git_args(&self) -> Result<Vec<String>, RepoError> {
        let args = match self {
            Self::ValidateRepo { .. } => command::is_inside_work_tree(),
            Self::RefreshStatus => command::status(),
            Self::RefreshLog { limit } => command::log(*limit),
            Self::RefreshBranches => command::branches(),
            Self::RefreshRemoteBranches => command::remote_branches(),
            Self::RefreshConflicts => command::conflicts(),
            Self::RefreshStashes => command::stash_list(),
            Self::RefreshTags => command::tags(),
            Self::RefreshRemotes => command::remotes(),
            Self::Diff { path, staged } => command::diff_file(path, *staged),
            Self::Stage { paths } => command::stage(paths),
            Self::Unstage { paths } => command::unstage(paths),
            Self::Discard { paths } => command::discard(paths),
            Self::Commit { message, amend } => command::commit(message, *amend),
            Self::Fetch => command::fetch(),
            Self::Pull => command::pull_ff_only(),
            Self::Push {
                set_upstream,
                remote,
                branch,
            } => command::push(*set_upstream, remote.as_deref(), branch.as_deref())?,
            Self::SwitchBranch { name } => command::switch_branch(name),
            Self::CreateBranch { name, from_ref } => command::create_branch(name, from_ref),
            Self::DeleteBranch { name, force } => command::delete_branch(name, *force),
            Self::DeleteRemoteBranch { remote, name } => command::delete_remote_branch(remote, name),
            Self::SetUpstream { upstream, branch } => {
                command::set_upstream(upstream, branch.as_deref())
            }
            Self::StashSave {
                message,
                include_untracked,
            } => command::stash_save(message.as_deref(), *include_untracked),
            Self::StashApply { selector } => command::stash_apply(selector.as_deref()),
            Self::StashPop { selector } => command::stash_pop(selector.as_deref()),
            Self::StashDrop { selector } => command::stash_drop(selector.as_deref()),
            Self::CreateTag { name, target } => command::create_tag(name, target.as_deref()),
            Self::DeleteTag { name } => command::delete_tag(name),
            Self::PushTag { remote, name } => command::push_tag(remote, name),
            Self::PushTags { remote } => command::push_all_tags(remote),
            Self::AddRemote { name, url } => command::add_remote(name, url),
            Self::RemoveRemote { name } => command::remove_remote(name),
            Self::SetRemoteUrl { name, url } => command::set_remote_url(name, url),
            Self::GitVersion => command::version(),
        };
        Ok(args)
    }
}

/// What an outstanding run is for; consumed once by its completion.
#[derive(Debug, Clone)]
pub struct PendingIntent {
    pub handle: RunHandle,
    pub intent: Intent,
}
