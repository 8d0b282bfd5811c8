// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]  log_level, file_log_level, log_file
//! [git]     executable, log_limit, [git.env]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::git::command::DEFAULT_LOG_LIMIT;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Optional log file; no file logging when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::WARN,
            file_log_level: LogLevel::DEBUG,
            log_file: None,
        }
    }
}

/// How git is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Program name or path of the git executable.
    pub executable: String,
    /// Commits loaded by a log refresh.
    pub log_limit: usize,
    /// Extra environment for every invocation, applied over the defaults.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            executable: "git".to_string(),
            log_limit: DEFAULT_LOG_LIMIT,
            env: BTreeMap::new(),
        }
    }
}

impl GitConfig {
    /// Checks value ranges and normalizes environment names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty executable or a
    /// zero log limit.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.executable.trim().is_empty() {
            return Err(invalid("executable", "must not be empty"));
        }
        if self.log_limit == 0 {
            return Err(invalid("log_limit", "must be at least 1"));
        }
        // table keys may arrive lowercased
        self.env = std::mem::take(&mut self.env)
            .into_iter()
            .map(|(k, v)| (k.to_ascii_uppercase(), v))
            .collect();
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: "git".to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
