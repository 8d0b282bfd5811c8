// gitdeck: git front-end core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{LogConfig, LogFormat, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    let err = LogLevel::new(6).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'log_level' in section '[global]': log level must be 0-5, got 6");
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=5)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(filters, ["off", "error", "warn", "info", "debug", "trace"]);
}

#[test]
fn test_verbose_levels_scope_to_gitdeck() {
    assert_eq!(LogLevel::SILENT.directives(), "off");
    assert_eq!(LogLevel::WARN.directives(), "warn");
    insta::assert_snapshot!(LogLevel::DEBUG.directives(), @"warn,gitdeck=debug");
    assert_eq!(LogLevel::TRACE.directives(), "warn,gitdeck=trace");
}

#[test]
fn test_log_level_serde_as_integer() {
    let json = serde_json::to_string(&LogLevel::DEBUG).unwrap();
    assert_eq!(json, "4");
    let level: LogLevel = serde_json::from_str("1").unwrap();
    assert_eq!(level, LogLevel::ERROR);
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert!(config.log_file().is_none());
    assert_eq!(config.format(), LogFormat::Text);
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::TRACE)
        .maybe_with_log_file(Some("out/gitdeck.log".into()))
        .with_format(LogFormat::from_json_flag(true))
        .build();
    assert_eq!(config.console_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), Some(Path::new("out/gitdeck.log")));
    assert_eq!(config.format(), LogFormat::Json);
    assert_eq!(LogFormat::from_json_flag(false), LogFormat::Text);
}

#[test]
fn test_env_directives_override_level() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::INFO)
        .build();
    assert_eq!(config.console_directives(None), "warn,gitdeck=info");
    assert_eq!(config.console_directives(Some("  ")), "warn,gitdeck=info");
    assert_eq!(
        config.console_directives(Some("gitdeck::controller=trace")),
        "gitdeck::controller=trace"
    );
}
