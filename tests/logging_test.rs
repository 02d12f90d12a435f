// ABOUTME: Tests for logging configuration and environment variable handling
// ABOUTME: Validates defaults, format selection and service identity overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Academy Analytics Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use academy_analytics::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

fn clear_logging_vars() {
    for name in [
        "RUST_LOG",
        "LOG_FORMAT",
        "LOG_INCLUDE_LOCATION",
        "SERVICE_NAME",
        "SERVICE_VERSION",
    ] {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_logging_vars();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("SERVICE_NAME", "academy-nightly");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.service_name, "academy-nightly");

    clear_logging_vars();
}

#[test]
#[serial]
fn test_unknown_format_falls_back_to_compact() {
    clear_logging_vars();
    env::set_var("LOG_FORMAT", "xml");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Compact);

    env::set_var("LOG_FORMAT", "pretty");
    assert_eq!(LoggingConfig::from_env().format, LogFormat::Pretty);

    clear_logging_vars();
}

#[test]
#[serial]
fn test_default_logging_config() {
    clear_logging_vars();
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "academy-analytics");
    assert!(!config.service_version.is_empty());

    let from_env = LoggingConfig::from_env();
    assert_eq!(from_env.level, config.level);
    assert_eq!(from_env.service_name, config.service_name);
}
