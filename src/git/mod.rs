// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command building, execution and output decoding.
//!
//! ```text
//!   command.rs        runner.rs               parse/
//!   intent -> argv    argv -> CommandSpec     bytes -> model
//!        \                |                     ^
//!         +-------> GitRunner.run() ---------+  |
//!                   (default env, cwd)       |  |
//!                          |                 v  |
//!                    CommandRunner --> Finished(stdout)
//! ```

pub mod command;
pub mod model;
pub mod parse;
pub mod runner;
pub mod version;

pub use runner::GitRunner;
pub use version::GitVersion;

#[cfg(test)]
mod tests;
