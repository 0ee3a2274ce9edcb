// ABOUTME: Rolling-window training load aggregation and trend classification
// ABOUTME: Sums distance, duration, and load over trailing windows and compares consecutive weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Load aggregator
//!
//! Windows are anchored on a reference date `as_of` and include both ends:
//! the short window is `[as_of - short, as_of]`, the long window
//! `[as_of - long, as_of]`. The trend compares the short window against the
//! non-overlapping window right before it, `[as_of - 2*short, as_of - short)`.
//!
//! Trend classification uses a hysteresis band around the previous window's
//! load. A previous load of zero gives no baseline, so the trend is stable.

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};
use trainwise_core::constants::trend_thresholds::BOUNDARY_TOLERANCE;
use trainwise_core::models::{DateRange, LoadSummary, LoadTrend, TrainingRecord, WindowStats};

use crate::config::intelligence::{IntelligenceConfig, LoadTrendConfig};

/// Calculator for rolling-window load metrics
#[derive(Debug, Clone)]
pub struct LoadAggregator {
    config: LoadTrendConfig,
}

impl Default for LoadAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadAggregator {
    /// Create an aggregator using the global intelligence configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().load_trend.clone(),
        }
    }

    /// Create an aggregator with explicit configuration
    #[must_use]
    pub const fn with_config(config: LoadTrendConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &LoadTrendConfig {
        &self.config
    }

    /// Compute short and long window statistics and the load trend as of a date
    ///
    /// Records dated after `as_of` are ignored. An empty sequence yields
    /// all-zero statistics and a stable trend.
    #[must_use]
    pub fn compute_load_summary(&self, records: &[TrainingRecord], as_of: NaiveDate) -> LoadSummary {
        let short_range = DateRange::trailing(as_of, self.config.short_window_days);
        let long_range = DateRange::trailing(as_of, self.config.long_window_days);
        let previous_range = self.previous_window(as_of);

        let mut short = WindowAccumulator::default();
        let mut long = WindowAccumulator::default();
        let mut previous = WindowAccumulator::default();

        for record in records {
            let sample = Sample::from_record(record);
            if short_range.contains(record.date) {
                short.add(&sample);
            }
            if long_range.contains(record.date) {
                long.add(&sample);
            }
            if previous_range.is_some_and(|range| range.contains(record.date)) {
                previous.add(&sample);
            }
        }

        let trend = self.classify_trend(short.load, previous.load);

        debug!(
            %as_of,
            records = records.len(),
            short_load = short.load,
            previous_load = previous.load,
            %trend,
            "Computed load summary"
        );

        LoadSummary {
            as_of,
            short_window: short.finish(self.config.distance_precision),
            long_window: long.finish(self.config.distance_precision),
            trend,
        }
    }

    /// Statistics for the records falling inside an arbitrary inclusive range
    #[must_use]
    pub fn window_stats(&self, records: &[TrainingRecord], range: DateRange) -> WindowStats {
        records
            .iter()
            .filter(|record| range.contains(record.date))
            .fold(WindowAccumulator::default(), |mut acc, record| {
                acc.add(&Sample::from_record(record));
                acc
            })
            .finish(self.config.distance_precision)
    }

    /// Classify the current window's load against the previous window's
    ///
    /// Comparisons are strict: a load sitting exactly on a band boundary is
    /// stable. A load counts as on the boundary when it is within
    /// `BOUNDARY_TOLERANCE` of it, relative to the boundary (absolute below 1.0).
    /// For a previous load of 100 that absorbs up to about 1.15e-7 above 115
    /// or 8.5e-8 below 85; anything farther out crosses the band.
    #[must_use]
    pub fn classify_trend(&self, current_load: f64, previous_load: f64) -> LoadTrend {
        if previous_load <= 0.0 {
            return LoadTrend::Stable;
        }

        let upper = previous_load * self.config.increase_ratio;
        let lower = previous_load * self.config.decrease_ratio;

        if current_load - upper > tolerance(upper) {
            LoadTrend::Increasing
        } else if lower - current_load > tolerance(lower) {
            LoadTrend::Decreasing
        } else {
            LoadTrend::Stable
        }
    }

    /// `[as_of - 2*short, as_of - short)` as an inclusive range
    fn previous_window(&self, as_of: NaiveDate) -> Option<DateRange> {
        let days = u64::from(self.config.short_window_days);
        let end = as_of.checked_sub_days(Days::new(days + 1))?;
        let start = as_of
            .checked_sub_days(Days::new(days * 2))
            .unwrap_or(NaiveDate::MIN);
        (start <= end).then(|| DateRange::new(start, end))
    }
}

fn tolerance(bound: f64) -> f64 {
    BOUNDARY_TOLERANCE * bound.abs().max(1.0)
}

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

/// A record's values after sanitizing
struct Sample {
    distance: f64,
    duration_seconds: u64,
    load: f64,
}

impl Sample {
    fn from_record(record: &TrainingRecord) -> Self {
        Self {
            distance: non_negative(record.distance, "distance", record.date),
            duration_seconds: record.duration_seconds,
            load: non_negative(record.training_load, "training_load", record.date),
        }
    }
}

fn non_negative(value: f64, field: &'static str, date: NaiveDate) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!(%date, field, value, "Ignoring negative or non-finite record value");
        0.0
    }
}

#[derive(Default)]
struct WindowAccumulator {
    distance: f64,
    duration_seconds: u64,
    load: f64,
    count: usize,
}

impl WindowAccumulator {
    fn add(&mut self, sample: &Sample) {
        self.distance += sample.distance;
        self.duration_seconds = self.duration_seconds.saturating_add(sample.duration_seconds);
        self.load += sample.load;
        self.count += 1;
    }

    fn finish(self, distance_precision: u32) -> WindowStats {
        WindowStats {
            total_distance: round_to(self.distance, distance_precision),
            total_duration_seconds: self.duration_seconds,
            total_load: self.load,
            session_count: self.count,
        }
    }
}
