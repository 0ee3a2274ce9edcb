// ABOUTME: Engine default values for load windows, trend bands, and progressive overload
// ABOUTME: Pure data constants organized by domain; configuration layers override them at runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Out-of-the-box values for the training engine. Nothing in the engine reads
//! these directly; they seed the `Default` implementations of the intelligence
//! configuration so every value stays tunable.

/// Trailing window lengths used by the load aggregator
pub mod load_windows {
    /// Short trailing window (acute load), in days
    pub const SHORT_WINDOW_DAYS: u32 = 7;
    /// Long trailing window (chronic load), in days
    pub const LONG_WINDOW_DAYS: u32 = 30;
    /// Decimal places kept when reporting window distance totals
    pub const DISTANCE_PRECISION: u32 = 1;
}

/// Hysteresis band around the previous window's load
pub mod trend_thresholds {
    /// Current load must exceed previous x this ratio to count as increasing
    pub const INCREASE_RATIO: f64 = 1.15;
    /// Current load must fall below previous x this ratio to count as decreasing
    pub const DECREASE_RATIO: f64 = 0.85;
    /// Relative tolerance applied when comparing against a band boundary
    pub const BOUNDARY_TOLERANCE: f64 = 1e-9;
}

/// Progressive overload policy
pub mod progression {
    /// Multiplier applied to the last used load after a fully completed session (+2.5%)
    pub const INCREMENT_FACTOR: f64 = 1.025;
    /// Largest increment factor accepted by configuration validation (+50%)
    pub const MAX_INCREMENT_FACTOR: f64 = 1.5;
    /// How far back the service looks for session history, in days
    pub const HISTORY_LOOKBACK_DAYS: u32 = 90;
}

/// Movement pattern labels used by the built-in templates and catalog
pub mod movement_patterns {
    /// Knee-dominant squat pattern
    pub const SQUAT: &str = "squat";
    /// Hip-dominant hinge pattern
    pub const HINGE: &str = "hinge";
    /// Horizontal pressing
    pub const HORIZONTAL_PUSH: &str = "horizontal_push";
    /// Vertical pressing
    pub const VERTICAL_PUSH: &str = "vertical_push";
    /// Horizontal pulling (rows)
    pub const HORIZONTAL_PULL: &str = "horizontal_pull";
    /// Vertical pulling (pull-ups, pulldowns)
    pub const VERTICAL_PULL: &str = "vertical_pull";
    /// Single-leg work
    pub const LUNGE: &str = "lunge";
}

/// Exercise categories used for starting load lookup
pub mod exercise_categories {
    /// Barbell lifts
    pub const BARBELL: &str = "barbell";
    /// Dumbbell lifts
    pub const DUMBBELL: &str = "dumbbell";
    /// Kettlebell work
    pub const KETTLEBELL: &str = "kettlebell";
    /// Bodyweight movements (load is added weight)
    pub const BODYWEIGHT: &str = "bodyweight";
    /// Cable and machine stations
    pub const MACHINE: &str = "machine";
}

/// Unit conversions
pub mod units {
    /// Meters per kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
}
