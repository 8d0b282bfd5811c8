// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!   RepoError     NotARepo, CommandFailed, Parse, Precondition
//!   ProcessError  EmptyCommand, ExecutableNotFound
//!   ConfigError   InvalidValue
//!
//!   anyhow::Result at the CLI boundary
//! ```
//!
//! [`RepoError`] is the taxonomy surfaced to observers as the "last error"
//! in [`RepoState`](crate::controller::state::RepoState).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

// --- Repository Errors ---

/// Errors surfaced to the presentation layer as the current "last error".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    /// The configured path failed the work-tree check, or no path is configured.
    #[error("not a git repository: {path}")]
    NotARepo { path: String },

    /// A dispatched command exited nonzero.
    #[error("command failed ({exit_code}): {}", args.join(" "))]
    CommandFailed {
        args: Vec<String>,
        exit_code: i32,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },

    /// Command output could not be decoded into the expected shape.
    #[error("failed to parse git output: {message}")]
    Parse { message: String },

    /// A local precondition was violated before anything was spawned.
    #[error("{message}")]
    Precondition { message: String },
}

impl RepoError {
    /// Builds a [`RepoError::NotARepo`] for the given path.
    pub fn not_a_repo(path: impl Into<String>) -> Self {
        Self::NotARepo { path: path.into() }
    }

    /// Builds a [`RepoError::Precondition`].
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// Builds a [`RepoError::Parse`].
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Decoded stderr of a failed command, if this is a [`RepoError::CommandFailed`].
    #[must_use]
    pub fn stderr_text(&self) -> Option<String> {
        match self {
            Self::CommandFailed { stderr, .. } => Some(String::from_utf8_lossy(stderr).into_owned()),
            _ => None,
        }
    }

    /// Whether this is a push rejected because the branch has no upstream.
    ///
    /// Matches git's English stderr, so it only works under the default
    /// `C.UTF-8` locale the runner forces.
    #[must_use]
    pub fn is_missing_upstream(&self) -> bool {
        let Self::CommandFailed { args, stderr, .. } = self else {
            return false;
        };
        if !args.iter().any(|a| a == "push") {
            return false;
        }
        let stderr = String::from_utf8_lossy(stderr);
        stderr.contains("has no upstream branch") || stderr.contains("no upstream branch")
    }
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The argument vector was empty, nothing to launch.
    #[error("command spec has an empty argument vector")]
    EmptyCommand,

    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
