// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch command arguments.
//!
//! # Subcommands
//!
//! ```text
//! branch create NAME [--from REF]   → switch -c NAME REF
//! branch delete NAME [--force]      → branch -d | -D
//! branch delete-remote REMOTE NAME  → push REMOTE --delete NAME
//! branch set-upstream UPSTREAM [BRANCH]
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `branch` command.
#[derive(Debug, Clone, Args)]
pub struct BranchArgs {
    #[command(subcommand)]
    pub subcommand: BranchSubcommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum BranchSubcommand {
    /// Creates a branch and switches to it.
    Create(CreateBranchArgs),

    /// Deletes a local branch.
    Delete(DeleteBranchArgs),

    /// Deletes a branch on a remote.
    #[command(name = "delete-remote")]
    DeleteRemote(DeleteRemoteBranchArgs),

    /// Sets the upstream of a branch (the current one by default).
    #[command(name = "set-upstream")]
    SetUpstream(SetUpstreamArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CreateBranchArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Start point (defaults to HEAD).
    #[arg(long = "from", value_name = "REF")]
    pub from_ref: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct DeleteBranchArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Deletes even if not merged.
    #[arg(short = 'f', long)]
    pub force: bool,
}

#[derive(Debug, Clone, Args)]
pub struct DeleteRemoteBranchArgs {
    #[arg(value_name = "REMOTE")]
    pub remote: String,

    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Debug, Clone, Args)]
pub struct SetUpstreamArgs {
    /// Upstream ref, e.g. `origin/main`.
    #[arg(value_name = "UPSTREAM")]
    pub upstream: String,

    #[arg(value_name = "BRANCH")]
    pub branch: Option<String>,
}
