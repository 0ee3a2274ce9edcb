// ABOUTME: Training record, window statistics, and load trend models
// ABOUTME: Inputs and outputs of the rolling-window load aggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::units::METERS_PER_KM;
use crate::errors::AppError;

/// A single dated training record from the historical log
///
/// Distance is kept in whatever unit the log uses (kilometers for running
/// activities converted through [`TrainingRecord::from_running_activity`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Calendar date the session took place
    pub date: NaiveDate,
    /// Distance covered
    pub distance: f64,
    /// Moving duration in seconds
    pub duration_seconds: u64,
    /// Training load score for the session
    pub training_load: f64,
}

impl TrainingRecord {
    /// Create a training record
    #[must_use]
    pub const fn new(
        date: NaiveDate,
        distance: f64,
        duration_seconds: u64,
        training_load: f64,
    ) -> Self {
        Self {
            date,
            distance,
            duration_seconds,
            training_load,
        }
    }

    /// Build a record from a running activity whose distance is in meters
    #[must_use]
    pub fn from_running_activity(
        date: NaiveDate,
        distance_meters: f64,
        duration_seconds: u64,
        training_load: f64,
    ) -> Self {
        Self::new(
            date,
            distance_meters / METERS_PER_KM,
            duration_seconds,
            training_load,
        )
    }
}

/// Inclusive calendar date range `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included
    pub start: NaiveDate,
    /// Last day included
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range; `start` and `end` are swapped if given in reverse
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// The trailing lookback `[as_of - days, as_of]`
    #[must_use]
    pub fn trailing(as_of: NaiveDate, days: u32) -> Self {
        let start = as_of
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: as_of }
    }

    /// Whether `date` falls inside the range (both ends inclusive)
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Aggregated totals over one trailing window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowStats {
    /// Sum of distance, rounded for reporting
    pub total_distance: f64,
    /// Sum of duration in seconds
    pub total_duration_seconds: u64,
    /// Sum of training load, as accumulated
    pub total_load: f64,
    /// Number of records inside the window
    pub session_count: usize,
}

/// Direction of training load between two consecutive windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadTrend {
    /// Current window load is above the upper band
    Increasing,
    /// Current window load is below the lower band
    Decreasing,
    /// Inside the band, or no baseline to compare against
    Stable,
}

impl LoadTrend {
    /// Lowercase label used in configuration and serialized output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for LoadTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadTrend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "increasing" => Ok(Self::Increasing),
            "decreasing" => Ok(Self::Decreasing),
            "stable" => Ok(Self::Stable),
            other => Err(AppError::invalid_input(format!(
                "unknown load trend '{other}'"
            ))),
        }
    }
}

/// Result of the load aggregator for one reference date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Reference date the windows are anchored on
    pub as_of: NaiveDate,
    /// Short trailing window (7 days by default)
    #[serde(rename = "last7")]
    pub short_window: WindowStats,
    /// Long trailing window (30 days by default)
    #[serde(rename = "last30")]
    pub long_window: WindowStats,
    /// Short window compared against the equally long window right before it
    pub trend: LoadTrend,
}
