// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote command arguments.

use clap::{Args, Subcommand};

#[derive(Debug, Clone, Args)]
pub struct RemoteArgs {
    #[command(subcommand)]
    pub subcommand: RemoteSubcommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum RemoteSubcommand {
    /// Adds a remote.
    Add {
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Removes a remote.
    Remove {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Changes a remote's URL.
    #[command(name = "set-url")]
    SetUrl {
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(value_name = "URL")]
        url: String,
    },
}
