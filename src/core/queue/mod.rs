// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Serializing command queue with background coalescing.
//!
//! ```text
//!            enqueue(item)
//!                 |
//!   BACKGROUND? --+--> drop pending items with the same key
//!                 |
//!                 v
//!   pending: [ item, item, ... ]   (FIFO by enqueue order)
//!                 |
//!   idle? --------+--> pick earliest USER item, else earliest item
//!                 |       state := running
//!                 v
//!        Some(action) returned to the caller, who must run it and
//!        eventually call mark_idle()
//!
//!   mark_idle() --> state := idle, then pick the next item the same way
//! ```
//!
//! The queue never runs anything itself. Every call that can start work
//! hands the started action back, so the owner executes it without the
//! queue calling into the owner. At most one action is running at a time.
//! There is no timeout: an action that never reaches `mark_idle` holds the
//! queue at running.

use std::collections::VecDeque;

use tracing::trace;

use super::observer::{Observers, SubscriptionId};

/// Scheduling tier of a queued item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// User-initiated work; always runs before background work.
    User,
    /// Automatic refreshes; coalesced by key.
    Background,
}

/// A unit of deferred work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueItem<A> {
    key: String,
    action: A,
    priority: Priority,
}

impl<A> QueueItem<A> {
    pub fn new(key: impl Into<String>, action: A, priority: Priority) -> Self {
        Self {
            key: key.into(),
            action,
            priority,
        }
    }

    pub fn user(key: impl Into<String>, action: A) -> Self {
        Self::new(key, action, Priority::User)
    }

    pub fn background(key: impl Into<String>, action: A) -> Self {
        Self::new(key, action, Priority::Background)
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

/// Snapshot passed to queue-changed subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueChanged {
    pub running: bool,
    pub pending: usize,
}

#[derive(Debug)]
pub struct CommandQueue<A> {
    running: bool,
    pending: VecDeque<QueueItem<A>>,
    observers: Observers<QueueChanged>,
}

impl<A> Default for CommandQueue<A> {
    fn default() -> Self {
        Self {
            running: false,
            pending: VecDeque::new(),
            observers: Observers::new(),
        }
    }
}

impl<A> CommandQueue<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an action is currently executing.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Number of items waiting to start.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Keys of the waiting items, in enqueue order.
    pub fn pending_keys(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(QueueItem::key)
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&QueueChanged) + Send + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Adds an item and starts the next one if the queue is idle.
    ///
    /// A background item replaces any waiting item with the same key. When
    /// this returns `Some`, the queue is running and the caller must execute
    /// the action.
    #[must_use = "a started action must be executed"]
    pub fn enqueue(&mut self, item: QueueItem<A>) -> Option<A> {
        if item.priority == Priority::Background {
            let before = self.pending.len();
            self.pending.retain(|queued| queued.key != item.key);
            if self.pending.len() != before {
                trace!(key = %item.key, "coalesced background item");
            }
        }
        self.pending.push_back(item);
        self.notify();
        self.try_start_next()
    }

    /// Blocks the queue without starting anything.
    pub fn mark_running(&mut self) {
        self.running = true;
        self.notify();
    }

    /// Releases the running slot and starts the next eligible item.
    #[must_use = "a started action must be executed"]
    pub fn mark_idle(&mut self) -> Option<A> {
        self.running = false;
        self.notify();
        self.try_start_next()
    }

    fn try_start_next(&mut self) -> Option<A> {
        if self.running || self.pending.is_empty() {
            return None;
        }
        let index = self
            .pending
            .iter()
            .position(|item| item.priority == Priority::User)
            .unwrap_or(0);
        let item = self.pending.remove(index)?;
        trace!(key = %item.key, priority = ?item.priority, "starting queued item");
        self.running = true;
        self.notify();
        Some(item.action)
    }

    fn notify(&mut self) {
        let snapshot = QueueChanged {
            running: self.running,
            pending: self.pending.len(),
        };
        self.observers.emit(&snapshot);
    }
}
