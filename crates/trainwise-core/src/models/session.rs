// ABOUTME: Session history, week type periodization toggle, and session suggestion models
// ABOUTME: Inputs and outputs of the progressive-overload session planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::training::LoadTrend;
use crate::errors::{AppError, AppResult};

/// Periodization toggle selecting which session template applies
///
/// Parsing an unrecognized label is a configuration error. Deserialization
/// goes through the same parser as [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum WeekType {
    /// Week with kids at home
    #[serde(rename = "kid")]
    Kid,
    /// Week without kids at home
    #[serde(rename = "non-kid")]
    NonKid,
}

impl WeekType {
    /// Every variant, in declaration order
    pub const ALL: [Self; 2] = [Self::Kid, Self::NonKid];

    /// Canonical label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kid => "kid",
            Self::NonKid => "non-kid",
        }
    }

    /// The other week type, used when alternating
    #[must_use]
    pub const fn alternate(self) -> Self {
        match self {
            Self::Kid => Self::NonKid,
            Self::NonKid => Self::Kid,
        }
    }
}

impl fmt::Display for WeekType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "kid" => Ok(Self::Kid),
            "non-kid" | "non_kid" | "nonkid" => Ok(Self::NonKid),
            _ => Err(
                AppError::config_invalid(format!("unknown week type '{}'", s.trim()))
                    .with_resource_id(normalized),
            ),
        }
    }
}

impl TryFrom<String> for WeekType {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        value.parse()
    }
}

/// One exercise performed in a past session
///
/// `reps` and `loads` hold one value per performed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionHistoryEntry {
    /// Date of the session
    pub date: NaiveDate,
    /// Name of the exercise in reference data
    pub exercise: String,
    /// Number of sets performed
    pub sets: u32,
    /// Reps completed in each set
    pub reps: Vec<u32>,
    /// Load used in each set
    pub loads: Vec<f64>,
    /// Rep target that was prescribed for this session, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescribed_reps: Option<u32>,
    /// Week type the session was planned under, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_type: Option<WeekType>,
}

impl SessionHistoryEntry {
    /// Start an entry with no sets
    #[must_use]
    pub fn new(date: NaiveDate, exercise: impl Into<String>) -> Self {
        Self {
            date,
            exercise: exercise.into(),
            sets: 0,
            reps: Vec::new(),
            loads: Vec::new(),
            prescribed_reps: None,
            week_type: None,
        }
    }

    /// Append a performed set
    #[must_use]
    pub fn set(mut self, reps: u32, load: f64) -> Self {
        self.sets += 1;
        self.reps.push(reps);
        self.loads.push(load);
        self
    }

    /// Append `count` identical sets
    #[must_use]
    pub fn sets(self, count: u32, reps: u32, load: f64) -> Self {
        (0..count).fold(self, |entry, _| entry.set(reps, load))
    }

    /// Record the prescribed rep target
    #[must_use]
    pub const fn prescribed_reps(mut self, reps: u32) -> Self {
        self.prescribed_reps = Some(reps);
        self
    }

    /// Record the week type the session belonged to
    #[must_use]
    pub const fn week_type(mut self, week_type: WeekType) -> Self {
        self.week_type = Some(week_type);
        self
    }

    /// Check the per-set vectors agree with the set count and loads are usable
    ///
    /// # Errors
    ///
    /// Returns a data integrity error describing the first inconsistency found
    pub fn validate(&self) -> AppResult<()> {
        let sets = self.sets as usize;
        if sets == 0 {
            return Err(self.integrity_error("records no sets"));
        }
        if self.reps.len() != sets || self.loads.len() != sets {
            return Err(self.integrity_error(&format!(
                "declares {sets} sets but has {} rep counts and {} loads",
                self.reps.len(),
                self.loads.len()
            )));
        }
        if self.loads.iter().any(|load| !load.is_finite() || *load < 0.0) {
            return Err(self.integrity_error("has a negative or non-finite load"));
        }
        Ok(())
    }

    /// Heaviest load used across the performed sets
    #[must_use]
    pub fn top_load(&self) -> f64 {
        self.loads.iter().copied().fold(0.0, f64::max)
    }

    /// Whether every performed set reached `target` reps
    #[must_use]
    pub fn completed_all_reps(&self, target: u32) -> bool {
        !self.reps.is_empty() && self.reps.iter().all(|&reps| reps >= target)
    }

    fn integrity_error(&self, problem: &str) -> AppError {
        AppError::data_integrity(format!(
            "history entry for '{}' on {} {problem}",
            self.exercise, self.date
        ))
        .with_resource_id(self.exercise.clone())
    }
}

/// Why a load was suggested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionRationale {
    /// All prescribed reps completed last time; load increased
    Progression,
    /// Reps fell short last time; load repeated
    Hold,
    /// Load trend signals fatigue; increment suppressed
    FatigueDeload,
    /// No history for the exercise; configured starting load
    StartingLoad,
}

impl SuggestionRationale {
    /// Kebab-case label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Progression => "progression",
            Self::Hold => "hold",
            Self::FatigueDeload => "fatigue-deload",
            Self::StartingLoad => "starting-load",
        }
    }
}

impl fmt::Display for SuggestionRationale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggested prescription for one template slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSuggestion {
    /// Exercise name in reference data
    pub exercise: String,
    /// Template slot this exercise fills
    pub movement_pattern: String,
    /// Working load to use
    pub suggested_load: f64,
    /// Number of working sets
    pub suggested_sets: u32,
    /// Reps per set
    pub suggested_reps: u32,
    /// Why this load
    pub rationale: SuggestionRationale,
    /// Load the suggestion was derived from, absent for starting loads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_load: Option<f64>,
}

/// Recommended next session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSuggestion {
    /// Week type the template was taken from
    pub week_type: WeekType,
    /// Load trend the planner was given, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<LoadTrend>,
    /// One suggestion per template slot, in template order
    pub exercises: Vec<ExerciseSuggestion>,
}
