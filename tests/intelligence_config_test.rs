// ABOUTME: Unit tests for engine configuration defaults, validation, and overrides
// ABOUTME: Exercises environment variable overrides and planner JSON files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;
use trainwise::config::{Environment, LogLevel, ServiceConfig};
use trainwise::errors::{AppError, ErrorCode};
use trainwise::intelligence::{
    ConfigError, IntelligenceConfig, LoadTrendConfig, SessionPlannerConfig, SessionTemplate,
};
use trainwise::models::{LoadTrend, WeekType};

const ENGINE_VARS: [&str; 8] = [
    "INTELLIGENCE_LOAD_SHORT_WINDOW_DAYS",
    "INTELLIGENCE_LOAD_LONG_WINDOW_DAYS",
    "INTELLIGENCE_LOAD_INCREASE_RATIO",
    "INTELLIGENCE_LOAD_DECREASE_RATIO",
    "INTELLIGENCE_PLANNER_INCREMENT_FACTOR",
    "INTELLIGENCE_PLANNER_FATIGUE_GUARD_TREND",
    "INTELLIGENCE_PLANNER_FALLBACK_WEEK_TYPE",
    "INTELLIGENCE_PLANNER_HISTORY_LOOKBACK_DAYS",
];

fn clear_engine_vars() {
    for var in ENGINE_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_config_validation() {
    let config = IntelligenceConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_defaults_preserve_out_of_the_box_behavior() {
    let load = LoadTrendConfig::default();
    assert_eq!(load.short_window_days, 7);
    assert_eq!(load.long_window_days, 30);
    assert!((load.increase_ratio - 1.15).abs() < f64::EPSILON);
    assert!((load.decrease_ratio - 0.85).abs() < f64::EPSILON);

    let planner = SessionPlannerConfig::default();
    assert!((planner.increment_factor - 1.025).abs() < f64::EPSILON);
    assert_eq!(planner.fatigue_guard_trend, LoadTrend::Decreasing);
    assert_eq!(planner.fallback_week_type, WeekType::NonKid);
    assert!(planner.templates.contains_key(&WeekType::Kid));
    assert!(planner.templates.contains_key(&WeekType::NonKid));
}

#[test]
fn test_invalid_load_trend_values() {
    let mut config = LoadTrendConfig {
        short_window_days: 0,
        ..LoadTrendConfig::default()
    };
    assert!(config.validate().is_err());

    config = LoadTrendConfig {
        short_window_days: 14,
        long_window_days: 7,
        ..LoadTrendConfig::default()
    };
    assert!(config.validate().is_err());

    config = LoadTrendConfig {
        increase_ratio: 0.9,
        ..LoadTrendConfig::default()
    };
    assert!(config.validate().is_err());

    config = LoadTrendConfig {
        decrease_ratio: 1.2,
        ..LoadTrendConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_planner_values() {
    let mut config = SessionPlannerConfig {
        increment_factor: 1.0,
        ..SessionPlannerConfig::default()
    };
    assert!(config.validate().is_err());

    config = SessionPlannerConfig {
        increment_factor: 2.0,
        ..SessionPlannerConfig::default()
    };
    assert!(config.validate().is_err());

    config = SessionPlannerConfig::default();
    config
        .templates
        .insert(WeekType::Kid, SessionTemplate::new(Vec::new()));
    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingField(_))
    ));

    config = SessionPlannerConfig::default();
    config
        .starting_loads
        .by_category
        .insert("barbell".to_owned(), -5.0);
    assert!(config.validate().is_err());

    config = SessionPlannerConfig {
        history_lookback_days: 0,
        ..SessionPlannerConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_config_error_converts_to_configuration_app_error() {
    let missing: AppError = ConfigError::MissingField("template slots").into();
    assert_eq!(missing.code, ErrorCode::ConfigMissing);
    assert!(missing.is_configuration_error());

    let invalid: AppError = ConfigError::ValueOutOfRange("increment_factor").into();
    assert_eq!(invalid.code, ErrorCode::ConfigInvalid);
    assert!(invalid.is_configuration_error());
}

#[test]
#[serial]
fn test_environment_variable_overrides() {
    clear_engine_vars();
    env::set_var("INTELLIGENCE_LOAD_SHORT_WINDOW_DAYS", "5");
    env::set_var("INTELLIGENCE_LOAD_INCREASE_RATIO", "1.2");
    env::set_var("INTELLIGENCE_PLANNER_INCREMENT_FACTOR", "1.05");
    env::set_var("INTELLIGENCE_PLANNER_FATIGUE_GUARD_TREND", "increasing");
    env::set_var("INTELLIGENCE_PLANNER_FALLBACK_WEEK_TYPE", "kid");
    env::set_var("INTELLIGENCE_PLANNER_HISTORY_LOOKBACK_DAYS", "30");

    let config = IntelligenceConfig::load().unwrap();

    assert_eq!(config.load_trend.short_window_days, 5);
    assert!((config.load_trend.increase_ratio - 1.2).abs() < 0.001);
    assert!((config.session_planner.increment_factor - 1.05).abs() < 0.001);
    assert_eq!(
        config.session_planner.fatigue_guard_trend,
        LoadTrend::Increasing
    );
    assert_eq!(config.session_planner.fallback_week_type, WeekType::Kid);
    assert_eq!(config.session_planner.history_lookback_days, 30);

    clear_engine_vars();
}

#[test]
#[serial]
fn test_unparseable_environment_value_is_rejected() {
    clear_engine_vars();
    env::set_var("INTELLIGENCE_PLANNER_FALLBACK_WEEK_TYPE", "holiday");

    let result = IntelligenceConfig::load();
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    clear_engine_vars();
}

#[test]
#[serial]
fn test_environment_value_failing_validation_is_rejected() {
    clear_engine_vars();
    env::set_var("INTELLIGENCE_LOAD_DECREASE_RATIO", "1.5");

    assert!(IntelligenceConfig::load().is_err());

    clear_engine_vars();
}

#[test]
#[serial]
fn test_planner_config_file_replaces_defaults() {
    clear_engine_vars();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "templates": {{
                "kid": {{ "slots": [{{ "movement_pattern": "squat", "sets": 5, "reps": 5 }}] }}
            }},
            "increment_factor": 1.05
        }}"#
    )
    .unwrap();

    let config = IntelligenceConfig::load_with_planner_file(file.path()).unwrap();
    let planner = &config.session_planner;

    assert_eq!(planner.templates.len(), 1);
    assert_eq!(planner.templates[&WeekType::Kid].slots[0].sets, 5);
    assert!((planner.increment_factor - 1.05).abs() < 0.001);
    // Fields absent from the file keep their defaults
    assert_eq!(planner.fallback_week_type, WeekType::NonKid);
    assert_eq!(planner.default_exercises["squat"], "Back Squat");
}

#[test]
#[serial]
fn test_planner_config_file_errors() {
    let missing = SessionPlannerConfig::from_json_file(std::path::Path::new(
        "/nonexistent/planner.json",
    ));
    assert!(matches!(missing, Err(ConfigError::File(_))));

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let malformed = SessionPlannerConfig::from_json_file(file.path());
    assert!(matches!(malformed, Err(ConfigError::Parse(_))));

    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "increment_factor": 3.0 }}"#).unwrap();
    assert!(IntelligenceConfig::load_with_planner_file(file.path()).is_err());
}

#[test]
fn test_planner_config_file_week_type_labels() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "fallback_week_type": "Non_Kid" }}"#).unwrap();
    let config = SessionPlannerConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.fallback_week_type, WeekType::NonKid);

    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "fallback_week_type": "deload" }}"#).unwrap();
    let err: AppError = SessionPlannerConfig::from_json_file(file.path())
        .unwrap_err()
        .into();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("unknown week type 'deload'"));
}

#[test]
#[serial]
fn test_service_config_from_env() {
    env::set_var("ENVIRONMENT", "production");
    env::set_var("TRAINWISE_RECORDS_PATH", "/data/records.json");
    env::set_var("TRAINWISE_CATALOG_PATH", "  ");
    env::remove_var("TRAINWISE_HISTORY_PATH");
    env::remove_var("TRAINWISE_PLANNER_CONFIG");

    let config = ServiceConfig::from_env();

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(
        config.data.records.as_deref(),
        Some(std::path::Path::new("/data/records.json"))
    );
    assert_eq!(config.data.history, None);
    assert_eq!(config.data.catalog, None);
    assert_eq!(config.planner_config_path, None);

    env::remove_var("ENVIRONMENT");
    env::remove_var("TRAINWISE_RECORDS_PATH");
    env::remove_var("TRAINWISE_CATALOG_PATH");
}

#[test]
fn test_log_level_and_environment_parsing() {
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert!(Environment::from_str_or_default("prod").is_production());
}
