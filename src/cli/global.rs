// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE        ← Additional config files (can repeat)
//! --log-level N        ← Console verbosity (0-5)
//! --file-log-level N   ← File verbosity (defaults to --log-level)
//! --log-file FILE      ← Enables file logging
//! --git PATH           ← git.executable override
//!
//! Precedence: CLI flags > GITDECK_* env > --config > gitdeck.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Repository to operate on.
    #[arg(short = 'C', long = "repo", value_name = "DIR", default_value = ".", global = true)]
    pub repo: PathBuf,

    /// Additional TOML configuration file(s). Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Skips `gitdeck.toml` in the current directory.
    #[arg(long = "no-default-config", global = true)]
    pub no_default_config: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Git executable to run.
    #[arg(long = "git", value_name = "PATH", global = true)]
    pub git: Option<String>,

    /// Renders results as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Converts command-line options to dotted configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("global.log_level", level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level", level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file", path.display().to_string()));
        }

        if let Some(ref git) = self.git {
            overrides.push(("git.executable", git.clone()));
        }

        overrides
    }
}
