// ABOUTME: Training service orchestrating data fetches and the load / planning engine
// ABOUTME: Fetches once per call through the provider traits and delegates every decision to the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use trainwise_core::errors::AppResult;
use trainwise_core::models::{DateRange, LoadSummary, LoadTrend, SessionSuggestion, WeekType};
use trainwise_intelligence::{IntelligenceConfig, LoadAggregator, SessionPlanner};

use crate::providers::TrainingDataStore;

/// Load summary and next-session suggestion computed for the same date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingOverview {
    /// Trailing window statistics and trend
    pub summary: LoadSummary,
    /// Suggested next session, guarded by the summary's trend
    pub suggestion: SessionSuggestion,
}

/// Protocol-agnostic entry point for load summaries and session suggestions
#[derive(Debug, Clone)]
pub struct TrainingService<S> {
    store: S,
    config: IntelligenceConfig,
}

impl<S: TrainingDataStore> TrainingService<S> {
    /// Create a service over a store with explicit engine configuration
    #[must_use]
    pub const fn new(store: S, config: IntelligenceConfig) -> Self {
        Self { store, config }
    }

    /// Engine configuration in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Underlying data store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Range of records needed to cover the long window and the previous short window
    #[must_use]
    pub fn record_range(&self, as_of: NaiveDate) -> DateRange {
        let load = &self.config.load_trend;
        let days = load
            .short_window_days
            .saturating_mul(2)
            .max(load.long_window_days);
        DateRange::trailing(as_of, days)
    }

    /// Range of session history the planner looks at
    #[must_use]
    pub fn history_range(&self, as_of: NaiveDate) -> DateRange {
        DateRange::trailing(as_of, self.config.session_planner.history_lookback_days)
    }

    /// Compute trailing window statistics and the load trend as of a date
    ///
    /// # Errors
    ///
    /// Returns an error if the record provider fails
    pub async fn load_summary(&self, as_of: NaiveDate) -> AppResult<LoadSummary> {
        let records = self.store.fetch_records(self.record_range(as_of)).await?;
        let summary = LoadAggregator::with_config(self.config.load_trend.clone())
            .compute_load_summary(&records, as_of);

        info!(
            %as_of,
            records = records.len(),
            trend = %summary.trend,
            "Computed load summary"
        );
        Ok(summary)
    }

    /// Suggest the next session as of a date
    ///
    /// The load summary is computed first and its trend drives the fatigue guard.
    ///
    /// # Errors
    ///
    /// Returns a provider error, or the planner's configuration or data
    /// integrity error
    pub async fn suggest_next_session(
        &self,
        as_of: NaiveDate,
        week_type: Option<WeekType>,
    ) -> AppResult<SessionSuggestion> {
        let summary = self.load_summary(as_of).await?;
        self.plan_session(as_of, week_type, summary.trend).await
    }

    /// Load summary and session suggestion together, fetching each collection once
    ///
    /// # Errors
    ///
    /// Same as [`Self::load_summary`] and [`Self::suggest_next_session`]
    pub async fn training_overview(
        &self,
        as_of: NaiveDate,
        week_type: Option<WeekType>,
    ) -> AppResult<TrainingOverview> {
        let summary = self.load_summary(as_of).await?;
        let suggestion = self.plan_session(as_of, week_type, summary.trend).await?;
        Ok(TrainingOverview {
            summary,
            suggestion,
        })
    }

    async fn plan_session(
        &self,
        as_of: NaiveDate,
        week_type: Option<WeekType>,
        trend: LoadTrend,
    ) -> AppResult<SessionSuggestion> {
        let history = self.store.fetch_history(self.history_range(as_of)).await?;
        let library = self.store.exercise_library().await?;

        let suggestion = SessionPlanner::new(&self.config.session_planner, &library)
            .suggest_session(&history, week_type, Some(trend))?;

        info!(
            %as_of,
            week_type = %suggestion.week_type,
            history = history.len(),
            exercises = suggestion.exercises.len(),
            "Suggested next session"
        );
        Ok(suggestion)
    }
}
