// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for single-verb repository commands.
//!
//! ```text
//! log [-n N]                branches [--remote]
//! diff PATH [--staged]      stage|unstage|discard PATH...
//! commit -m MSG [--amend]   push [-u] [REMOTE] [BRANCH]
//! switch NAME
//! ```

use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Number of commits to show (defaults to git.log_limit).
    #[arg(short = 'n', long = "max-count", value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct BranchesArgs {
    /// Lists remote-tracking branches instead.
    #[arg(short = 'r', long)]
    pub remote: bool,
}

#[derive(Debug, Clone, Args)]
pub struct DiffArgs {
    /// File to diff.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Compares the index with HEAD instead of the work tree with the index.
    #[arg(long, visible_alias = "cached")]
    pub staged: bool,
}

#[derive(Debug, Clone, Args)]
pub struct PathsArgs {
    /// Paths relative to the repository root.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub struct CommitArgs {
    /// Commit message.
    #[arg(short = 'm', long = "message", value_name = "MSG")]
    pub message: String,

    /// Replaces the tip of the current branch.
    #[arg(long)]
    pub amend: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PushArgs {
    /// Sets the pushed branch's upstream; requires REMOTE and BRANCH.
    #[arg(short = 'u', long = "set-upstream")]
    pub set_upstream: bool,

    #[arg(value_name = "REMOTE")]
    pub remote: Option<String>,

    #[arg(value_name = "BRANCH")]
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct SwitchArgs {
    /// Branch to switch to.
    #[arg(value_name = "NAME")]
    pub name: String,
}
