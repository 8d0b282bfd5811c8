// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.

use gitdeck::config::{Config, ConfigLoader};
use gitdeck::logging::LogLevel;

#[test]
fn config_from_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("gitdeck.toml");
    std::fs::write(
        &path,
        r#"
[global]
log_level = 3
file_log_level = 5

[git]
log_limit = 25

[git.env]
GIT_SSH_COMMAND = "ssh -i key"
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.global.log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.git.log_limit, 25);
    assert_eq!(config.git.executable, "git");
    assert_eq!(config.git.env.len(), 1);
}

#[test]
fn config_file_layers_over_optional_default() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("base.toml");
    let extra = temp.path().join("extra.toml");
    std::fs::write(&base, "[git]\nexecutable = \"git-base\"\nlog_limit = 10\n").unwrap();
    std::fs::write(&extra, "[git]\nlog_limit = 20\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(&base)
        .add_toml_file(&extra);
    assert_eq!(loader.loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.git.executable, "git-base");
    assert_eq!(config.git.log_limit, 20);
}

#[test]
fn config_invalid_toml_fails() {
    assert!(Config::parse("[git\nlog_limit = ").is_err());
}

#[test]
fn config_serializes_back_to_toml_shape() {
    let config = Config::default();
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["git"]["executable"], "git");
    assert_eq!(value["global"]["log_level"], 2);
    assert!(value["global"].get("log_file").is_none());
}
