// ABOUTME: Integration tests for engine configuration loading and validation
// ABOUTME: Covers defaults, FITPLAN_* environment overrides and rejected inconsistent values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitplan_engine::config::{ConfigError, EngineConfig};
use serial_test::serial;
use std::env;

const OVERRIDE_VARS: &[&str] = &[
    "FITPLAN_DEFAULT_SESSION_MINUTES",
    "FITPLAN_MIN_MINUTES_PER_EXERCISE",
    "FITPLAN_OBESE_FEMALE_PROTEIN_CAP_G",
    "FITPLAN_CARDIO_AT_RISK_IMC",
    "FITPLAN_METRICS_PERSISTENCE",
    "FITPLAN_METRICS_DATABASE_URL",
    "FITPLAN_PIPELINE_MAX_ATTEMPTS",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_are_valid() {
    common::init_test_logging();
    clear_overrides();
    let config = EngineConfig::load().unwrap();

    assert_eq!(config.generator.default_session_minutes, 60);
    assert_eq!(config.generator.min_minutes_per_exercise, 4);
    assert_eq!(config.nutrition.obese_female_protein_cap_g, 180);
    assert_eq!(config.nutrition.obese_male_protein_cap_g, 220);
    assert_eq!(config.cardio.combined_stimulus_ceiling, 6);
    assert_eq!(config.pipeline.max_attempts, 3);
    assert!(config.metrics.persistence_enabled);
    assert!(config.metrics.database_url.is_none());
}

#[test]
#[serial]
fn test_environment_overrides_are_applied() {
    clear_overrides();
    env::set_var("FITPLAN_DEFAULT_SESSION_MINUTES", "75");
    env::set_var("FITPLAN_OBESE_FEMALE_PROTEIN_CAP_G", " 170 ");
    env::set_var("FITPLAN_METRICS_PERSISTENCE", "false");
    env::set_var("FITPLAN_METRICS_DATABASE_URL", "sqlite:./metrics.db");
    env::set_var("FITPLAN_PIPELINE_MAX_ATTEMPTS", "5");

    let config = EngineConfig::load().unwrap();
    clear_overrides();

    assert_eq!(config.generator.default_session_minutes, 75);
    assert_eq!(config.nutrition.obese_female_protein_cap_g, 170);
    assert!(!config.metrics.persistence_enabled);
    assert_eq!(
        config.metrics.database_url.as_deref(),
        Some("sqlite:./metrics.db")
    );
    assert_eq!(config.pipeline.max_attempts, 5);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("FITPLAN_CARDIO_AT_RISK_IMC", "trinta e cinco");
    let result = EngineConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_inconsistent_override_fails_validation() {
    clear_overrides();
    env::set_var("FITPLAN_MIN_MINUTES_PER_EXERCISE", "20");
    let result = EngineConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_validate_rejects_zero_attempts() {
    let mut config = EngineConfig::default();
    config.pipeline.max_attempts = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_validate_rejects_inverted_body_fat_clamp() {
    let mut config = EngineConfig::default();
    config.nutrition.min_body_fat_percent = 70.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_config_serializes() {
    let value = serde_json::to_value(EngineConfig::default()).unwrap();
    assert_eq!(value["pipeline"]["max_attempts"], 3);
    assert_eq!(value["cardio"]["light_intensity"], "leve");
}
