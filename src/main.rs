// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> load config --> Logging --> Command Dispatch
//!   Version | Options | ConfigFiles | repository commands
//! ```

use std::process::ExitCode;

use gitdeck::cli::{self, Command};
use gitdeck::cmd::config::{
    build_config_loader, load_config, run_config_files_command, run_options_command,
};
use gitdeck::cmd::repo::run_repo_command;
use gitdeck::config::Config;
use gitdeck::logging::{LogConfig, LogFormat, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config, cli.global.json)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn build_log_config(config: &Config, json: bool) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .with_format(LogFormat::from_json_flag(json))
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::ConfigFiles) => {
            run_config_files_command(&build_config_loader(&cli.global).format_loaded_files());
            Ok(())
        }
        Some(command) => run_repo_command(command, config, &cli.global).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
