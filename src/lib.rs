// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                                 session / render
//!                                      |
//!              ,-----------------------v---,
//!              |        controller         |
//!              |  intents, routing, state  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!               queue        git     config
//!            USER / BG   argv, parse  TOML, env
//!                 |           |
//!                 v           v
//!   +-----------------------------------------+
//!   |  core   process runner, queue, observer |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
