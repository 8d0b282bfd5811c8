// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! One CLI invocation's runner, controller and event loop.
//!
//! ```text
//! Session::new(&GitConfig)
//!   which(executable) --> ProcessRunner --> GitRunner(env) --> RepoController
//!
//! run(|c| c.intent())  /  settle()
//!   select! { run_until_idle | ctrl_c -> cancel_running, drain, bail }
//!   last_error? --> Err
//! ```

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, bail};
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::config::GitConfig;
use crate::controller::{RepoController, RepoState, run_until_idle};
use crate::core::process::{ProcessRunner, RunnerEvent};
use crate::error::{RepoError, Result};
use crate::git::GitRunner;
use crate::git::runner::resolve_executable;

pub struct Session {
    controller: RepoController,
    events: flume::Receiver<RunnerEvent>,
}

impl Session {
    /// Resolves git and wires a runner on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable cannot be found.
    pub fn new(git: &GitConfig) -> Result<Self> {
        let executable = resolve_executable(&git.executable)?;
        debug!(git = %executable.display(), "using git");
        let (runner, events) = ProcessRunner::new(Handle::current());
        let runner = GitRunner::new(Arc::new(runner), executable.to_string_lossy())
            .with_env(&git.env);
        let controller = RepoController::new(runner).with_log_limit(git.log_limit);
        Ok(Self { controller, events })
    }

    #[must_use]
    pub const fn state(&self) -> &RepoState {
        self.controller.state()
    }

    pub const fn controller_mut(&mut self) -> &mut RepoController {
        &mut self.controller
    }

    /// Opens `repo` and waits for the initial status refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if `repo` is not a work tree or git fails.
    pub async fn open(&mut self, repo: &Path) -> Result<()> {
        let path = std::path::absolute(repo)?;
        self.run(|c| c.open_repo(path)).await
    }

    /// Submits through `submit`, then settles.
    ///
    /// # Errors
    ///
    /// See [`Session::settle`].
    pub async fn run<F>(&mut self, submit: F) -> Result<()>
    where
        F: FnOnce(&mut RepoController),
    {
        submit(&mut self.controller);
        self.settle().await
    }

    /// Drives events until the controller is idle.
    ///
    /// # Errors
    ///
    /// Returns the controller's last error, or an error if interrupted.
    pub async fn settle(&mut self) -> Result<()> {
        let finished = tokio::select! {
            res = run_until_idle(&mut self.controller, &self.events) => Some(res),
            _ = tokio::signal::ctrl_c() => None,
        };
        match finished {
            Some(res) => res?,
            None => {
                let cancelled = self.controller.cancel_running();
                warn!(cancelled, "interrupted, waiting for git to exit");
                run_until_idle(&mut self.controller, &self.events).await?;
                bail!("interrupted");
            }
        }
        match self.controller.state().last_error() {
            Some(err) => Err(surface(err)),
            None => Ok(()),
        }
    }
}

/// Turns the last error into a message with git's own stderr attached.
#[must_use]
pub fn surface(err: &RepoError) -> anyhow::Error {
    let mut message = err.to_string();
    if let Some(stderr) = err.stderr_text() {
        let stderr = stderr.trim_end();
        if !stderr.is_empty() {
            message.push('\n');
            message.push_str(stderr);
        }
    }
    if err.is_missing_upstream() {
        message.push_str("\nhint: set one with `gitdeck push -u <remote> <branch>`");
    }
    anyhow!(message)
}
