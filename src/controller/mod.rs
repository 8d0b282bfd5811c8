// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Intent dispatch and completion routing.
//!
//! ```text
//! open_repo / stage / commit / ...       (no repo? -> NotARepo("(none)"))
//!        |
//!        v
//! CommandQueue<Intent>  --started intent--> dispatch()
//!                                              GitRunner.run(argv, cwd)
//!                                              pending[handle.id] = intent
//!                                              busy = true
//!
//! RunnerEvent (one consumer) --> handle_event()
//!   Finished(handle, result)
//!     1. pending.remove(id)         unknown id -> ignored
//!     2. exit != 0                  -> CommandFailed
//!     3. route(intent, stdout)      -> RepoState setters (or Parse/NotARepo)
//!     4. refresh flags              -> BACKGROUND follow-up intents
//!     5. queue.mark_idle() -> dispatch next, busy cleared once nothing runs
//! ```
//!
//! The controller owns the queue, the pending map and the state. Everything
//! that touches them runs on whichever task drives [`RepoController::handle_event`],
//! so none of it is locked.

pub mod intent;
pub mod state;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::bail;
use tracing::{debug, info, warn};

use crate::core::observer::{Observers, SubscriptionId};
use crate::core::process::{CommandResult, RunHandle, RunnerEvent};
use crate::core::queue::{CommandQueue, QueueChanged, QueueItem};
use crate::error::{RepoError, Result};
use crate::git::command::{DEFAULT_FROM_REF, DEFAULT_LOG_LIMIT, DEFAULT_REMOTE};
use crate::git::{GitRunner, GitVersion, parse};

pub use intent::{Intent, PendingIntent, Refresh};
pub use state::{RepoState, StateChange};

/// Placeholder path reported when no repository is open.
pub const NO_REPO: &str = "(none)";

#[derive(Debug)]
pub struct RepoController {
    git: GitRunner,
    queue: CommandQueue<Intent>,
    state: RepoState,
    pending: HashMap<u64, PendingIntent>,
    log_limit: usize,
    command_observers: Observers<RunnerEvent>,
}

impl RepoController {
    #[must_use]
    pub fn new(git: GitRunner) -> Self {
        Self {
            git,
            queue: CommandQueue::new(),
            state: RepoState::new(),
            pending: HashMap::new(),
            log_limit: DEFAULT_LOG_LIMIT,
            command_observers: Observers::new(),
        }
    }

    /// Commit count for log refreshes.
    #[must_use]
    pub fn with_log_limit(mut self, limit: usize) -> Self {
        self.log_limit = limit.max(1);
        self
    }

    #[must_use]
    pub const fn state(&self) -> &RepoState {
        &self.state
    }

    #[must_use]
    pub const fn queue(&self) -> &CommandQueue<Intent> {
        &self.queue
    }

    /// Outstanding runs, by handle id.
    #[must_use]
    pub const fn pending(&self) -> &HashMap<u64, PendingIntent> {
        &self.pending
    }

    /// Nothing running, nothing waiting.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && !self.queue.is_running() && self.queue.is_empty()
    }

    pub fn subscribe_state<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn subscribe_queue<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&QueueChanged) + Send + 'static,
    {
        self.queue.subscribe(callback)
    }

    /// Receives every runner event (started, chunks, finished) before routing.
    pub fn subscribe_commands<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&RunnerEvent) + Send + 'static,
    {
        self.command_observers.subscribe(callback)
    }

    // --- Intents ---

    /// Validates `path` and adopts it as the current repository.
    pub fn open_repo(&mut self, path: impl Into<PathBuf>) {
        self.submit(Intent::ValidateRepo { path: path.into() });
    }

    pub fn refresh_status(&mut self) {
        self.submit(Intent::RefreshStatus);
    }

    pub fn refresh_log(&mut self) {
        self.submit(Intent::RefreshLog {
            limit: self.log_limit,
        });
    }

    pub fn refresh_branches(&mut self) {
        self.submit(Intent::RefreshBranches);
    }

    pub fn refresh_remote_branches(&mut self) {
        self.submit(Intent::RefreshRemoteBranches);
    }

    pub fn refresh_conflicts(&mut self) {
        self.submit(Intent::RefreshConflicts);
    }

    pub fn refresh_stashes(&mut self) {
        self.submit(Intent::RefreshStashes);
    }

    pub fn refresh_tags(&mut self) {
        self.submit(Intent::RefreshTags);
    }

    pub fn refresh_remotes(&mut self) {
        self.submit(Intent::RefreshRemotes);
    }

    pub fn request_diff(&mut self, path: impl Into<String>, staged: bool) {
        self.submit(Intent::Diff {
            path: path.into(),
            staged,
        });
    }

    pub fn stage(&mut self, paths: Vec<String>) {
        self.submit(Intent::Stage { paths });
    }

    pub fn unstage(&mut self, paths: Vec<String>) {
        self.submit(Intent::Unstage { paths });
    }

    pub fn discard(&mut self, paths: Vec<String>) {
        self.submit(Intent::Discard { paths });
    }

    pub fn commit(&mut self, message: impl Into<String>, amend: bool) {
        self.submit(Intent::Commit {
            message: message.into(),
            amend,
        });
    }

    pub fn fetch(&mut self) {
        self.submit(Intent::Fetch);
    }

    pub fn pull_ff_only(&mut self) {
        self.submit(Intent::Pull);
    }

    /// Pushes the current branch, optionally setting its upstream.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::Precondition`] without enqueueing anything when
    /// `set_upstream` is set but `remote` or `branch` is missing.
    pub fn push(
        &mut self,
        set_upstream: bool,
        remote: Option<String>,
        branch: Option<String>,
    ) -> std::result::Result<(), RepoError> {
        let intent = Intent::Push {
            set_upstream,
            remote,
            branch,
        };
        intent.git_args()?;
        self.submit(intent);
        Ok(())
    }

    pub fn switch_branch(&mut self, name: impl Into<String>) {
        self.submit(Intent::SwitchBranch { name: name.into() });
    }

    /// Creates `name` from `from_ref` (HEAD when absent) and switches to it.
    pub fn create_branch(&mut self, name: impl Into<String>, from_ref: Option<String>) {
        self.submit(Intent::CreateBranch {
            name: name.into(),
            from_ref: from_ref.unwrap_or_else(|| DEFAULT_FROM_REF.to_string()),
        });
    }

    pub fn delete_branch(&mut self, name: impl Into<String>, force: bool) {
        self.submit(Intent::DeleteBranch {
            name: name.into(),
            force,
        });
    }

    pub fn delete_remote_branch(&mut self, remote: impl Into<String>, name: impl Into<String>) {
        self.submit(Intent::DeleteRemoteBranch {
            remote: remote.into(),
            name: name.into(),
        });
    }

    pub fn set_upstream(&mut self, upstream: impl Into<String>, branch: Option<String>) {
        self.submit(Intent::SetUpstream {
            upstream: upstream.into(),
            branch,
        });
    }

    pub fn stash_save(&mut self, message: Option<String>, include_untracked: bool) {
        self.submit(Intent::StashSave {
            message,
            include_untracked,
        });
    }

    pub fn stash_apply(&mut self, selector: Option<String>) {
        self.submit(Intent::StashApply { selector });
    }

    pub fn stash_pop(&mut self, selector: Option<String>) {
        self.submit(Intent::StashPop { selector });
    }

    pub fn stash_drop(&mut self, selector: Option<String>) {
        self.submit(Intent::StashDrop { selector });
    }

    pub fn create_tag(&mut self, name: impl Into<String>, target: Option<String>) {
        self.submit(Intent::CreateTag {
            name: name.into(),
            target,
        });
    }

    pub fn delete_tag(&mut self, name: impl Into<String>) {
        self.submit(Intent::DeleteTag { name: name.into() });
    }

    /// Pushes one tag (to `origin` when no remote is given).
    pub fn push_tag(&mut self, name: impl Into<String>, remote: Option<String>) {
        self.submit(Intent::PushTag {
            remote: remote.unwrap_or_else(|| DEFAULT_REMOTE.to_string()),
            name: name.into(),
        });
    }

    pub fn push_tags(&mut self, remote: Option<String>) {
        self.submit(Intent::PushTags {
            remote: remote.unwrap_or_else(|| DEFAULT_REMOTE.to_string()),
        });
    }

    pub fn add_remote(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.submit(Intent::AddRemote {
            name: name.into(),
            url: url.into(),
        });
    }

    pub fn remove_remote(&mut self, name: impl Into<String>) {
        self.submit(Intent::RemoveRemote { name: name.into() });
    }

    pub fn set_remote_url(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.submit(Intent::SetRemoteUrl {
            name: name.into(),
            url: url.into(),
        });
    }

    /// Runs `git --version`; works without an open repository.
    pub fn check_git_version(&mut self) {
        self.submit(Intent::GitVersion);
    }

    /// Asks every outstanding run to terminate. Returns how many accepted.
    pub fn cancel_running(&self) -> usize {
        let runner = self.git.runner();
        self.pending
            .values()
            .filter(|p| runner.cancel(&p.handle))
            .count()
    }

    // --- Scheduling ---

    fn submit(&mut self, intent: Intent) {
        if intent.needs_repo() && self.state.repo_path().is_none() {
            self.state.set_error(RepoError::not_a_repo(NO_REPO));
            return;
        }
        let key = intent.key();
        let priority = intent.priority();
        let started = self.queue.enqueue(QueueItem::new(key, intent, priority));
        self.dispatch(started);
    }

    /// Launches the started intent. A launch failure is recorded and the
    /// queue moves on, so nothing is left holding the running slot.
    fn dispatch(&mut self, mut next: Option<Intent>) {
        while let Some(intent) = next {
            match self.launch(&intent) {
                Ok(handle) => {
                    debug!(run = handle.id(), key = intent.key(), "dispatched");
                    self.pending
                        .insert(handle.id(), PendingIntent { handle, intent });
                    self.state.set_busy(true);
                    return;
                }
                Err(err) => {
                    warn!(key = intent.key(), error = %err, "could not launch");
                    self.state.set_error(err);
                    next = self.queue.mark_idle();
                }
            }
        }
        if self.state.busy() && self.pending.is_empty() && !self.queue.is_running() {
            self.state.set_busy(false);
        }
    }

    fn launch(&self, intent: &Intent) -> std::result::Result<RunHandle, RepoError> {
        let cwd: Option<&Path> = match intent {
            Intent::ValidateRepo { path } => Some(path.as_path()),
            Intent::GitVersion => None,
            _ => Some(
                self.state
                    .repo_path()
                    .ok_or_else(|| RepoError::not_a_repo(NO_REPO))?,
            ),
        };
        let args = intent.git_args()?;
        self.git
            .run(args, cwd, None)
            .map_err(|e| RepoError::precondition(e.to_string()))
    }

    // --- Completion ---

    /// Consumes one runner event. Must be fed every event of every run.
    pub fn handle_event(&mut self, event: RunnerEvent) {
        self.command_observers.emit(&event);
        if let RunnerEvent::Finished(handle, result) = event {
            self.on_finished(&handle, result);
        }
    }

    fn on_finished(&mut self, handle: &RunHandle, result: CommandResult) {
        let Some(PendingIntent { intent, .. }) = self.pending.remove(&handle.id()) else {
            debug!(run = handle.id(), "completion for unknown run ignored");
            return;
        };

        if result.success() {
            let follow_ups = self.route(intent, result);
            self.enqueue_refreshes(follow_ups);
        } else {
            warn!(
                run = handle.id(),
                exit_code = result.exit_code(),
                cmd = %handle.spec().command_line(),
                "command failed"
            );
            let exit_code = result.exit_code();
            let (stdout, stderr) = result.into_output();
            self.state.set_error(RepoError::CommandFailed {
                args: handle.spec().args().to_vec(),
                exit_code,
                stdout,
                stderr,
            });
        }

        let next = self.queue.mark_idle();
        self.dispatch(next);
    }

    /// Stores the decoded payload; returns the follow-ups to enqueue.
    fn route(&mut self, intent: Intent, result: CommandResult) -> Refresh {
        let refresh = intent.refresh();
        let (stdout, _) = result.into_output();
        let state = &mut self.state;
        match intent {
            Intent::ValidateRepo { path } => {
                if String::from_utf8_lossy(&stdout).trim() == "true" {
                    info!(repo = %path.display(), "opened repository");
                    state.set_repo_path(path);
                    state.clear_error();
                    return refresh;
                }
                state.set_error(RepoError::not_a_repo(path.display().to_string()));
                return Refresh::empty();
            }
            Intent::RefreshStatus => state.set_status(parse::parse_status(&stdout)),
            Intent::RefreshLog { .. } => state.set_log(parse::parse_log(&stdout)),
            Intent::RefreshBranches => state.set_branches(parse::parse_branches(&stdout)),
            Intent::RefreshRemoteBranches => {
                state.set_remote_branches(parse::parse_remote_branches(&stdout));
            }
            Intent::RefreshConflicts => state.set_conflicts(parse::parse_conflicts(&stdout)),
            Intent::RefreshStashes => state.set_stashes(parse::parse_stashes(&stdout)),
            Intent::RefreshTags => state.set_tags(parse::parse_tags(&stdout)),
            Intent::RefreshRemotes => state.set_remotes(parse::parse_remotes(&stdout)),
            Intent::Diff { .. } => state.set_diff_text(parse::parse_diff(&stdout)),
            Intent::GitVersion => match GitVersion::parse(&String::from_utf8_lossy(&stdout)) {
                Ok(version) => {
                    if !version.is_supported() {
                        warn!(%version, "git is older than 2.23, switch and restore are unavailable");
                    }
                    state.set_git_version(version);
                }
                Err(err) => {
                    state.set_error(err);
                    return refresh;
                }
            },
            // mutations only trigger their refreshes
            _ => return refresh,
        }
        state.clear_error();
        refresh
    }

    fn enqueue_refreshes(&mut self, refresh: Refresh) {
        let follow_ups = [
            (Refresh::STATUS, Intent::RefreshStatus),
            (Refresh::BRANCHES, Intent::RefreshBranches),
            (
                Refresh::LOG,
                Intent::RefreshLog {
                    limit: self.log_limit,
                },
            ),
            (Refresh::STASHES, Intent::RefreshStashes),
            (Refresh::TAGS, Intent::RefreshTags),
            (Refresh::REMOTES, Intent::RefreshRemotes),
            (Refresh::REMOTE_BRANCHES, Intent::RefreshRemoteBranches),
        ];
        for (flag, intent) in follow_ups {
            if refresh.contains(flag) {
                self.submit(intent);
            }
        }
    }
}

/// Feeds runner events into `controller` until it is idle.
///
/// # Errors
///
/// Returns an error if the runner's event channel closes while commands are
/// still outstanding.
pub async fn run_until_idle(
    controller: &mut RepoController,
    events: &flume::Receiver<RunnerEvent>,
) -> Result<()> {
    while !controller.is_idle() {
        let Ok(event) = events.recv_async().await else {
            bail!(
                "runner event channel closed with {} command(s) outstanding",
                controller.pending().len()
            );
        };
        controller.handle_event(event);
    }
    Ok(())
}
