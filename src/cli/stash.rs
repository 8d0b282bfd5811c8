// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stash command arguments.
//!
//! ```text
//! stash save [-m MSG] [-u]
//! stash apply|pop|drop [stash@{N}]
//! ```

use clap::{Args, Subcommand};

#[derive(Debug, Clone, Args)]
pub struct StashArgs {
    #[command(subcommand)]
    pub subcommand: StashSubcommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum StashSubcommand {
    /// Stashes local changes.
    Save(StashSaveArgs),

    /// Applies a stash, keeping it.
    Apply(StashSelectorArgs),

    /// Applies a stash and drops it.
    Pop(StashSelectorArgs),

    /// Drops a stash.
    Drop(StashSelectorArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct StashSaveArgs {
    #[arg(short = 'm', long = "message", value_name = "MSG")]
    pub message: Option<String>,

    /// Includes untracked files.
    #[arg(short = 'u', long = "include-untracked")]
    pub include_untracked: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct StashSelectorArgs {
    /// Stash to act on (the latest by default).
    #[arg(value_name = "STASH")]
    pub selector: Option<String>,
}
