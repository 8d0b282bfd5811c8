// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tag command arguments.

use clap::{Args, Subcommand};

#[derive(Debug, Clone, Args)]
pub struct TagArgs {
    #[command(subcommand)]
    pub subcommand: TagSubcommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum TagSubcommand {
    /// Creates a lightweight tag.
    Create {
        #[arg(value_name = "NAME")]
        name: String,
        /// Commit to tag (defaults to HEAD).
        #[arg(value_name = "TARGET")]
        target: Option<String>,
    },

    /// Deletes a local tag.
    Delete {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Pushes one tag.
    Push {
        #[arg(value_name = "NAME")]
        name: String,
        /// Remote to push to (defaults to origin).
        #[arg(long, value_name = "REMOTE")]
        remote: Option<String>,
    },

    /// Pushes all tags.
    #[command(name = "push-all")]
    PushAll {
        #[arg(long, value_name = "REMOTE")]
        remote: Option<String>,
    },
}
