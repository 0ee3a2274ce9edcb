// ABOUTME: Session planner configuration: week templates, default exercises, and starting loads
// ABOUTME: Also carries the progressive overload increment and the fatigue guard trigger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session Planner Configuration
//!
//! The mapping from week type to template is configuration, not logic: the
//! planner only walks the template slots it is given. Defaults describe a
//! short three-slot session for kid weeks and a fuller five-slot session
//! otherwise.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trainwise_core::constants::exercise_categories::{
    BARBELL, BODYWEIGHT, DUMBBELL, KETTLEBELL, MACHINE,
};
use trainwise_core::constants::movement_patterns::{
    HINGE, HORIZONTAL_PULL, HORIZONTAL_PUSH, LUNGE, SQUAT, VERTICAL_PULL, VERTICAL_PUSH,
};
use trainwise_core::constants::progression;
use trainwise_core::models::{Exercise, LoadTrend, WeekType};

use super::error::ConfigError;

/// One movement pattern slot of a session template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSlot {
    /// Movement pattern the slot must train
    pub movement_pattern: String,
    /// Target working sets
    pub sets: u32,
    /// Target reps per set
    pub reps: u32,
}

impl TemplateSlot {
    /// Create a slot
    #[must_use]
    pub fn new(movement_pattern: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            movement_pattern: movement_pattern.into(),
            sets,
            reps,
        }
    }
}

/// Ordered list of slots making up one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTemplate {
    /// Slots in the order they should be trained
    pub slots: Vec<TemplateSlot>,
}

impl SessionTemplate {
    /// Create a template from slots
    #[must_use]
    pub const fn new(slots: Vec<TemplateSlot>) -> Self {
        Self { slots }
    }
}

/// Loads used for exercises with no history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingLoads {
    /// Per-exercise overrides, checked first
    pub by_exercise: BTreeMap<String, f64>,
    /// Per-category loads
    pub by_category: BTreeMap<String, f64>,
}

impl StartingLoads {
    /// Starting load for an exercise: exercise override, then category
    #[must_use]
    pub fn lookup(&self, exercise: &Exercise) -> Option<f64> {
        self.by_exercise
            .get(&exercise.name)
            .or_else(|| self.by_category.get(&exercise.category))
            .copied()
    }
}

/// Session planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionPlannerConfig {
    /// Template used for each week type
    pub templates: BTreeMap<WeekType, SessionTemplate>,
    /// Exercise to use for a movement pattern with no history
    pub default_exercises: BTreeMap<String, String>,
    /// Loads for exercises with no history
    pub starting_loads: StartingLoads,
    /// Multiplier applied after a fully completed session
    pub increment_factor: f64,
    /// Load trend that suppresses increments
    pub fatigue_guard_trend: LoadTrend,
    /// Week type used when none is requested and history carries no week type
    pub fallback_week_type: WeekType,
    /// How far back the service fetches session history, in days
    pub history_lookback_days: u32,
}

impl Default for SessionPlannerConfig {
    fn default() -> Self {
        let templates = BTreeMap::from([
            (
                WeekType::Kid,
                SessionTemplate::new(vec![
                    TemplateSlot::new(SQUAT, 3, 10),
                    TemplateSlot::new(HORIZONTAL_PUSH, 3, 10),
                    TemplateSlot::new(HORIZONTAL_PULL, 3, 10),
                ]),
            ),
            (
                WeekType::NonKid,
                SessionTemplate::new(vec![
                    TemplateSlot::new(SQUAT, 4, 8),
                    TemplateSlot::new(HINGE, 4, 8),
                    TemplateSlot::new(VERTICAL_PUSH, 4, 8),
                    TemplateSlot::new(VERTICAL_PULL, 4, 8),
                    TemplateSlot::new(LUNGE, 3, 10),
                ]),
            ),
        ]);

        let default_exercises = [
            (SQUAT, "Back Squat"),
            (HINGE, "Romanian Deadlift"),
            (HORIZONTAL_PUSH, "Bench Press"),
            (VERTICAL_PUSH, "Overhead Press"),
            (HORIZONTAL_PULL, "Barbell Row"),
            (VERTICAL_PULL, "Pull-up"),
            (LUNGE, "Walking Lunge"),
        ]
        .into_iter()
        .map(|(pattern, exercise)| (pattern.to_owned(), exercise.to_owned()))
        .collect();

        let by_category = [
            (BARBELL, 20.0),
            (DUMBBELL, 8.0),
            (KETTLEBELL, 12.0),
            (BODYWEIGHT, 0.0),
            (MACHINE, 25.0),
        ]
        .into_iter()
        .map(|(category, load)| (category.to_owned(), load))
        .collect();

        Self {
            templates,
            default_exercises,
            starting_loads: StartingLoads {
                by_exercise: BTreeMap::new(),
                by_category,
            },
            increment_factor: progression::INCREMENT_FACTOR,
            fatigue_guard_trend: LoadTrend::Decreasing,
            fallback_week_type: WeekType::NonKid,
            history_lookback_days: progression::HISTORY_LOOKBACK_DAYS,
        }
    }
}

impl SessionPlannerConfig {
    /// Validate templates, loads, and the progression policy
    ///
    /// A week type without a template is not rejected here; the planner
    /// reports it when that week type is actually requested.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid value found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.increment_factor.is_finite()
            || self.increment_factor <= 1.0
            || self.increment_factor > progression::MAX_INCREMENT_FACTOR
        {
            return Err(ConfigError::ValueOutOfRange(
                "increment_factor must be greater than 1.0 and at most 1.5",
            ));
        }

        for template in self.templates.values() {
            if template.slots.is_empty() {
                return Err(ConfigError::MissingField("template slots"));
            }
            if template
                .slots
                .iter()
                .any(|slot| slot.sets == 0 || slot.reps == 0)
            {
                return Err(ConfigError::ValueOutOfRange(
                    "template slots need at least one set and one rep",
                ));
            }
            if template
                .slots
                .iter()
                .any(|slot| slot.movement_pattern.trim().is_empty())
            {
                return Err(ConfigError::MissingField("template slot movement_pattern"));
            }
        }

        let invalid_load = self
            .starting_loads
            .by_exercise
            .values()
            .chain(self.starting_loads.by_category.values())
            .any(|load| !load.is_finite() || *load < 0.0);
        if invalid_load {
            return Err(ConfigError::ValueOutOfRange(
                "starting loads must be finite and non-negative",
            ));
        }

        if self.history_lookback_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "history_lookback_days must be at least 1",
            ));
        }

        Ok(())
    }
}
