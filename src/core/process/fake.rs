// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory runner that never starts a process.
//!
//! Records every spec and hands out sequential handles starting at 1. Tests
//! complete a run by feeding [`FakeRunner::finish`] into whatever consumes
//! runner events.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::runner::{CommandRunner, RunnerEvent};
use super::spec::{CommandResult, CommandSpec, RunHandle};
use crate::error::ProcessError;

#[derive(Debug)]
pub struct FakeRunner {
    next_id: AtomicU64,
    handles: Mutex<Vec<RunHandle>>,
    cancelled: Mutex<Vec<u64>>,
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            handles: Mutex::default(),
            cancelled: Mutex::default(),
        }
    }
}

impl FakeRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every handle issued so far, in launch order.
    #[must_use]
    pub fn handles(&self) -> Vec<RunHandle> {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Argument vectors of every launched spec, in launch order.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.handles()
            .iter()
            .map(|h| h.spec().args().to_vec())
            .collect()
    }

    /// The most recently issued handle.
    #[must_use]
    pub fn last(&self) -> Option<RunHandle> {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Ids passed to `cancel` or `kill`.
    #[must_use]
    pub fn cancelled(&self) -> Vec<u64> {
        self.cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Builds the completion event for `handle`.
    #[must_use]
    pub fn finish(handle: &RunHandle, exit_code: i32, stdout: &[u8], stderr: &[u8]) -> RunnerEvent {
        RunnerEvent::Finished(
            handle.clone(),
            CommandResult::new(exit_code, stdout.to_vec(), stderr.to_vec(), 0),
        )
    }

    fn record_cancel(&self, handle: &RunHandle) -> bool {
        let known = self
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|h| h.id() == handle.id());
        if known {
            self.cancelled
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(handle.id());
        }
        known
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, spec: CommandSpec) -> Result<RunHandle, ProcessError> {
        if spec.is_empty() {
            return Err(ProcessError::EmptyCommand);
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let handle = RunHandle::new(id, Arc::new(spec), 0);
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handle.clone());
        Ok(handle)
    }

    fn cancel(&self, handle: &RunHandle) -> bool {
        self.record_cancel(handle)
    }

    fn kill(&self, handle: &RunHandle) -> bool {
        self.record_cancel(handle)
    }
}
