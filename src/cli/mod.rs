// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI definition using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitdeck [-C REPO] [global options] <command>
//!   inspect   status | log | branches | stashes | tags | remotes | conflicts | diff
//!   change    stage | unstage | discard | commit | switch
//!   sync      fetch | pull | push
//!   manage    branch {..} | stash {..} | tag {..} | remote {..}
//!   misc      git-version | options | config-files | version
//! ```

pub mod branch;
pub mod global;
pub mod remote;
pub mod repo;
pub mod stash;
pub mod tag;


use crate::cli::branch::BranchArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::remote::RemoteArgs;
use crate::cli::repo::{
    BranchesArgs, CommitArgs, DiffArgs, LogArgs, PathsArgs, PushArgs, SwitchArgs,
};
use crate::cli::stash::StashArgs;
use crate::cli::tag::TagArgs;
use clap::{Parser, Subcommand};

/// Git front-end core.
///
/// Runs git through a serializing command queue and renders the parsed
/// repository state.
#[derive(Debug, Parser)]
#[command(
    name = "gitdeck",
    author,
    version,
    about = "Git front-end core",
    long_about = "gitdeck Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Every command opens the repository given by -C (the current\n\
                  directory by default), runs its git operation plus the\n\
                  refreshes it implies, then prints the resulting state.",
    after_help = "CONFIG FILES:\n\n\
                  gitdeck reads `gitdeck.toml` from the current directory if it\n\
                  exists, then every file given with --config, then GITDECK_*\n\
                  environment variables (e.g. GITDECK_GIT__LOG_LIMIT=50).\n\
                  Command-line flags override all of them."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files that were loaded.
    #[command(name = "config-files")]
    ConfigFiles,

    /// Shows the git version and whether it is supported.
    #[command(name = "git-version")]
    GitVersion,

    /// Shows the working tree status.
    Status,

    /// Shows commit history.
    Log(LogArgs),

    /// Lists branches.
    Branches(BranchesArgs),

    /// Lists stashes.
    Stashes,

    /// Lists tags.
    Tags,

    /// Lists remotes.
    Remotes,

    /// Lists unmerged paths.
    Conflicts,

    /// Shows the diff of one file.
    Diff(DiffArgs),

    /// Adds paths to the index.
    Stage(PathsArgs),

    /// Removes paths from the index.
    Unstage(PathsArgs),

    /// Discards work-tree changes to paths.
    Discard(PathsArgs),

    /// Records a commit.
    Commit(CommitArgs),

    /// Fetches all remotes.
    Fetch,

    /// Fast-forwards the current branch from its upstream.
    Pull,

    /// Pushes the current branch.
    Push(PushArgs),

    /// Switches to a branch.
    Switch(SwitchArgs),

    /// Manages branches.
    Branch(BranchArgs),

    /// Manages stashes.
    Stash(StashArgs),

    /// Manages tags.
    Tag(TagArgs),

    /// Manages remotes.
    Remote(RemoteArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
