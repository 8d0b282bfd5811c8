// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! CommandSpec { args, cwd, env }
//!       |
//!       v
//! ProcessRunner::run(spec) --> RunHandle { id, spec, started_at_ms }
//!       |
//!       +--> tokio task per run
//!              spawn child (tokio::process)
//!              pump stdout/stderr chunks --> RunnerEvent::Stdout/Stderr
//!              wait | terminate | kill
//!       |
//!       v
//! flume channel (single consumer)
//!   Started --> Stdout* / Stderr* --> Finished(CommandResult)
//! ```
//!
//! Exactly one `Finished` event is delivered per successful `run()`, after
//! every chunk event of that run.

mod io;
pub mod fake;
pub mod runner;
pub mod spec;

pub use fake::FakeRunner;
pub use runner::{CommandRunner, ProcessRunner, RunnerEvent};
pub use spec::{CommandResult, CommandSpec, RunHandle};
