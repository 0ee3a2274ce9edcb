// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, date helpers, and record / history builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `trainwise`

use std::sync::Once;

use chrono::{Days, NaiveDate};
use trainwise::intelligence::{IntelligenceConfig, SessionPlannerConfig};
use trainwise::models::{ExerciseLibrary, SessionHistoryEntry, TrainingRecord, WeekType};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Reference date used across tests
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

/// `n` days before `date`
pub fn days_before(date: NaiveDate, n: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(n)).unwrap()
}

/// `n` days after `date`
pub fn days_after(date: NaiveDate, n: u64) -> NaiveDate {
    date.checked_add_days(Days::new(n)).unwrap()
}

/// Record with only a training load set
pub fn load_record(date: NaiveDate, load: f64) -> TrainingRecord {
    TrainingRecord::new(date, 0.0, 0, load)
}

/// Record with every field set
pub fn record(date: NaiveDate, distance: f64, duration: u64, load: f64) -> TrainingRecord {
    TrainingRecord::new(date, distance, duration, load)
}

/// History entry with `sets` identical sets
pub fn history(
    date: NaiveDate,
    exercise: &str,
    sets: u32,
    reps: u32,
    load: f64,
) -> SessionHistoryEntry {
    SessionHistoryEntry::new(date, exercise).sets(sets, reps, load)
}

/// History entry tagged with a week type
pub fn tagged_history(
    date: NaiveDate,
    exercise: &str,
    week_type: WeekType,
) -> SessionHistoryEntry {
    history(date, exercise, 3, 10, 40.0).week_type(week_type)
}

/// Default planner configuration
pub fn planner_config() -> SessionPlannerConfig {
    SessionPlannerConfig::default()
}

/// Default engine configuration
pub fn intelligence_config() -> IntelligenceConfig {
    IntelligenceConfig::default()
}

/// Built-in exercise catalog
pub fn library() -> ExerciseLibrary {
    ExerciseLibrary::with_defaults()
}

/// Float comparison with a tight tolerance
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
