// ABOUTME: Load aggregator configuration for trailing windows and trend hysteresis bands
// ABOUTME: Carries the 7/30-day windows and 1.15x/0.85x trend ratios as tunable defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Load Trend Configuration
//!
//! Window lengths and the hysteresis band used to classify the short window's
//! load against the equally long window right before it.

use serde::{Deserialize, Serialize};
use trainwise_core::constants::{load_windows, trend_thresholds};

use super::error::ConfigError;

/// Largest supported number of decimals for reported distances
const MAX_DISTANCE_PRECISION: u32 = 6;

/// Load aggregator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadTrendConfig {
    /// Short trailing window in days; also the trend comparison window
    pub short_window_days: u32,
    /// Long trailing window in days
    pub long_window_days: u32,
    /// Ratio the current load must exceed to be classified increasing
    pub increase_ratio: f64,
    /// Ratio the current load must fall below to be classified decreasing
    pub decrease_ratio: f64,
    /// Decimal places kept when reporting distance totals
    pub distance_precision: u32,
}

impl Default for LoadTrendConfig {
    fn default() -> Self {
        Self {
            short_window_days: load_windows::SHORT_WINDOW_DAYS,
            long_window_days: load_windows::LONG_WINDOW_DAYS,
            increase_ratio: trend_thresholds::INCREASE_RATIO,
            decrease_ratio: trend_thresholds::DECREASE_RATIO,
            distance_precision: load_windows::DISTANCE_PRECISION,
        }
    }
}

impl LoadTrendConfig {
    /// Validate window lengths and band ratios
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a window is empty, the long window is shorter
    /// than the short one, or the band ratios do not straddle 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.short_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "short_window_days must be at least 1",
            ));
        }
        if self.long_window_days < self.short_window_days {
            return Err(ConfigError::InvalidRange(
                "long_window_days must be >= short_window_days",
            ));
        }
        if !self.increase_ratio.is_finite() || self.increase_ratio <= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "increase_ratio must be greater than 1.0",
            ));
        }
        if !self.decrease_ratio.is_finite()
            || self.decrease_ratio <= 0.0
            || self.decrease_ratio >= 1.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "decrease_ratio must be between 0.0 and 1.0 (exclusive)",
            ));
        }
        if self.distance_precision > MAX_DISTANCE_PRECISION {
            return Err(ConfigError::ValueOutOfRange(
                "distance_precision must be at most 6",
            ));
        }
        Ok(())
    }
}
