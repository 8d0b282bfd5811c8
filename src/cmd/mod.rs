// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config   options, config-files
//!   repo     Session (runner + controller) --> render (text | JSON)
//! ```

pub mod config;
pub mod render;
pub mod repo;
pub mod session;

#[cfg(test)]
mod tests;
