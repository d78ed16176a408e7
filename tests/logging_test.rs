// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates format parsing, environment overrides, and the verbose switch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_logbook::config::LogLevel;
use pierre_logbook::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("PRETTY"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("xml"), LogFormat::Compact); // Default fallback
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
    assert!(!config.include_spans);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "pierre_logbook=trace");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_SPANS", "1");

    let config = LoggingConfig::from_env(LogLevel::Info);

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_SPANS");

    assert_eq!(config.level, "pierre_logbook=trace");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_spans);
}

#[test]
#[serial]
fn test_fallback_level_and_verbose() {
    env::remove_var("RUST_LOG");

    let config = LoggingConfig::from_env(LogLevel::Error);
    assert_eq!(config.level, "error");

    let config = config.verbose();
    assert_eq!(config.level, "debug");
}

#[test]
#[serial]
fn test_pretty_subscriber_installs_once() {
    let config = LoggingConfig {
        format: LogFormat::Pretty,
        include_location: true,
        ..LoggingConfig::default()
    };

    assert!(config.init().is_ok());
    // A second global subscriber is refused rather than silently replacing the first
    assert!(config.init().is_err());
}
