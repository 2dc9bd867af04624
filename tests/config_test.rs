// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Covers data directory resolution, vision delay parsing, engine weight overrides, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Little Chef Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use little_chef::config::{AppConfig, MenuEngineConfig, DEFAULT_SCAN_DELAY_MS};
use little_chef::errors::ErrorCode;
use little_chef::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const ENV_VARS: &[&str] = &[
    "LITTLE_CHEF_DATA_DIR",
    "LITTLE_CHEF_SCAN_DELAY_MS",
    "LITTLE_CHEF_WEIGHT_BASE",
    "LITTLE_CHEF_WEIGHT_PANTRY_BONUS",
    "LITTLE_CHEF_WEIGHT_LIKED_BONUS",
    "LITTLE_CHEF_WEIGHT_DISLIKED",
    "LOG_FORMAT",
    "SERVICE_NAME",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// Application configuration
// ============================================================================

#[test]
#[serial]
fn test_from_env_uses_defaults() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.scan_delay, Duration::from_millis(DEFAULT_SCAN_DELAY_MS));
    assert_eq!(config.engine, MenuEngineConfig::default());
    assert!(config.profile_path().ends_with("user_data.json"));
    assert!(config.history_path().ends_with("menu_history.json"));
}

#[test]
#[serial]
fn test_from_env_reads_data_dir_and_delay() {
    clear_env();
    env::set_var("LITTLE_CHEF_DATA_DIR", "/tmp/little-chef-test");
    env::set_var("LITTLE_CHEF_SCAN_DELAY_MS", " 0 ");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.data_dir(), PathBuf::from("/tmp/little-chef-test"));
    assert_eq!(config.scan_delay, Duration::ZERO);
    assert_eq!(
        config.menu_state_path(),
        PathBuf::from("/tmp/little-chef-test/menu_state.json")
    );
    clear_env();
}

#[test]
#[serial]
fn test_invalid_scan_delay_is_config_error() {
    clear_env();
    env::set_var("LITTLE_CHEF_SCAN_DELAY_MS", "soon");

    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("LITTLE_CHEF_SCAN_DELAY_MS"));
    clear_env();
}

// ============================================================================
// Engine weights
// ============================================================================

#[test]
#[serial]
fn test_engine_weight_overrides() {
    clear_env();
    env::set_var("LITTLE_CHEF_WEIGHT_PANTRY_BONUS", "20");
    env::set_var("LITTLE_CHEF_WEIGHT_LIKED_BONUS", "40");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.engine.weights.base, 10);
    assert_eq!(config.engine.weights.pantry_complete_bonus, 20);
    assert_eq!(config.engine.weights.liked_bonus, 40);
    assert_eq!(config.engine.weights.disliked, 1);
    clear_env();
}

#[test]
#[serial]
fn test_unparseable_weight_is_rejected() {
    clear_env();
    env::set_var("LITTLE_CHEF_WEIGHT_BASE", "heavy");

    assert!(MenuEngineConfig::load().is_err());
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
#[serial]
fn test_zero_disliked_weight_is_rejected() {
    clear_env();
    env::set_var("LITTLE_CHEF_WEIGHT_DISLIKED", "0");

    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    clear_env();
}

// ============================================================================
// Logging
// ============================================================================

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "chef-test");

    let logging = LoggingConfig::from_env().with_level("debug");
    assert_eq!(logging.format, LogFormat::Json);
    assert_eq!(logging.service_name, "chef-test");
    assert_eq!(logging.level, "debug");
    clear_env();
}

#[test]
#[serial]
fn test_logging_defaults_to_compact() {
    clear_env();
    let logging = LoggingConfig::from_env();
    assert_eq!(logging.format, LogFormat::Compact);
    assert_eq!(logging.service_name, "little-chef");
}
