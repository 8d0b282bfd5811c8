// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Runner trait and the tokio-backed process runner.
//!
//! ```text
//! run(spec)
//!   empty args? --> Err(EmptyCommand), nothing spawned
//!   allocate id, register ActiveRun { terminate, kill }
//!   send Started
//!   runtime.spawn(io::drive)
//!
//! cancel(handle) --> terminate token (SIGTERM, then wait)
//! kill(handle)   --> kill token      (immediate)
//!   both return false once the run has left the active table
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::io;
use super::spec::{CommandResult, CommandSpec, RunHandle, monotonic_ms};
use crate::error::ProcessError;

/// Lifecycle events emitted by a runner.
///
/// For each run: one `Started`, any number of chunk events, then exactly one
/// `Finished`.
#[derive(Debug, Clone)]
pub enum RunnerEvent {
    Started(RunHandle),
    Stdout(RunHandle, Vec<u8>),
    Stderr(RunHandle, Vec<u8>),
    Finished(RunHandle, CommandResult),
}

impl RunnerEvent {
    /// The handle this event belongs to.
    #[must_use]
    pub const fn handle(&self) -> &RunHandle {
        match self {
            Self::Started(handle)
            | Self::Stdout(handle, _)
            | Self::Stderr(handle, _)
            | Self::Finished(handle, _) => handle,
        }
    }
}

/// Launches commands asynchronously and reports their lifecycle.
pub trait CommandRunner: Send + Sync {
    /// Starts `spec` without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::EmptyCommand`] if the argument vector is empty.
    fn run(&self, spec: CommandSpec) -> Result<RunHandle, ProcessError>;

    /// Requests graceful termination. False if the handle is unknown or finished.
    fn cancel(&self, handle: &RunHandle) -> bool;

    /// Requests immediate termination. False if the handle is unknown or finished.
    fn kill(&self, handle: &RunHandle) -> bool;
}

/// Termination controls for one in-flight run.
#[derive(Debug, Clone, Default)]
pub(super) struct ActiveRun {
    pub(super) terminate: CancellationToken,
    pub(super) kill: CancellationToken,
}

pub(super) type ActiveRuns = Arc<Mutex<HashMap<u64, ActiveRun>>>;

/// Runner backed by `tokio::process`.
///
/// Events are delivered on the receiver returned by [`ProcessRunner::new`].
#[derive(Debug)]
pub struct ProcessRunner {
    next_id: AtomicU64,
    active: ActiveRuns,
    events: flume::Sender<RunnerEvent>,
    runtime: Handle,
}

impl ProcessRunner {
    /// Creates a runner that spawns its tasks on `runtime`.
    #[must_use]
    pub fn new(runtime: Handle) -> (Self, flume::Receiver<RunnerEvent>) {
        let (events, rx) = flume::unbounded();
        let runner = Self {
            next_id: AtomicU64::new(1),
            active: Arc::default(),
            events,
            runtime,
        };
        (runner, rx)
    }

    /// Number of runs that have not yet finished.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn control(&self, handle: &RunHandle) -> Option<ActiveRun> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&handle.id())
            .cloned()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, spec: CommandSpec) -> Result<RunHandle, ProcessError> {
        if spec.is_empty() {
            return Err(ProcessError::EmptyCommand);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let handle = RunHandle::new(id, Arc::new(spec), monotonic_ms());
        let control = ActiveRun::default();
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, control.clone());

        debug!(
            run = id,
            cmd = %handle.spec().command_line(),
            cwd = ?handle.spec().cwd(),
            "exec"
        );

        let _ = self.events.send(RunnerEvent::Started(handle.clone()));
        self.runtime.spawn(io::drive(
            handle.clone(),
            control,
            self.events.clone(),
            Arc::clone(&self.active),
        ));
        Ok(handle)
    }

    fn cancel(&self, handle: &RunHandle) -> bool {
        let Some(control) = self.control(handle) else {
            return false;
        };
        warn!(run = handle.id(), cmd = %handle.spec().command_line(), "terminating process");
        control.terminate.cancel();
        true
    }

    fn kill(&self, handle: &RunHandle) -> bool {
        let Some(control) = self.control(handle) else {
            return false;
        };
        warn!(run = handle.id(), cmd = %handle.spec().command_line(), "killing process");
        control.kill.cancel();
        true
    }
}
