// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitdeck.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. GITDECK_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITDECK_GLOBAL__LOG_LEVEL=4      → global.log_level = 4
//! GITDECK_GIT__EXECUTABLE=/opt/git → git.executable = "/opt/git"
//! GITDECK_GIT__LOG_LIMIT=50        → git.log_limit = 50
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

pub use loader::ConfigLoader;
pub use types::{GitConfig, GlobalConfig};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "GITDECK";

/// Config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gitdeck.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Git invocation.
    pub git: GitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitdeck::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitdeck.toml")
    ///     .with_env_prefix("GITDECK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&mut self) -> std::result::Result<(), ConfigError> {
        self.git.validate()
    }

    /// Format configuration options for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "global.log_level".to_string(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("git.executable".to_string(), self.git.executable.clone());
        options.insert("git.log_limit".to_string(), self.git.log_limit.to_string());
        for (name, value) in &self.git.env {
            options.insert(format!("git.env.{name}"), value.clone());
        }

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
