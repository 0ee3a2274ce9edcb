// ABOUTME: Session suggestion planner with progressive overload and a fatigue guard
// ABOUTME: Picks the next session's exercises from a week template and suggests a load for each
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session suggestion planner
//!
//! Given past session history, an optional week type, and an optional load
//! trend, the planner walks the week's template and for every slot:
//!
//! 1. selects an exercise: the most recently performed one for the slot's
//!    movement pattern, else the configured default exercise, else the
//!    alphabetically first library exercise with that pattern
//! 2. suggests a load: the configured starting load when the exercise has no
//!    history; otherwise the last used load, multiplied by the increment
//!    factor when every prescribed rep was completed with a load above zero.
//!    Unloaded sets (bodyweight with no added load) hold.
//! 3. applies the fatigue guard: when the trend matches the configured
//!    trigger (`decreasing` by default) no increment is applied
//!
//! The planner is a pure function of its inputs. Ties are broken by date,
//! then by name or input position, never by hash order or wall clock.

use tracing::debug;
use trainwise_core::errors::{AppError, AppResult};
use trainwise_core::models::{
    Exercise, ExerciseLibrary, ExerciseSuggestion, LoadTrend, SessionHistoryEntry,
    SessionSuggestion, SuggestionRationale, WeekType,
};

use crate::config::intelligence::{SessionPlannerConfig, SessionTemplate, TemplateSlot};

/// Plans the next session from history and reference data
#[derive(Debug, Clone, Copy)]
pub struct SessionPlanner<'a> {
    config: &'a SessionPlannerConfig,
    library: &'a ExerciseLibrary,
}

impl<'a> SessionPlanner<'a> {
    /// Create a planner over a configuration and an exercise library
    #[must_use]
    pub const fn new(config: &'a SessionPlannerConfig, library: &'a ExerciseLibrary) -> Self {
        Self { config, library }
    }

    /// Suggest the next session
    ///
    /// When `week_type` is absent it alternates from the most recent history
    /// entry that recorded a week type, falling back to the configured week
    /// type. An absent `trend` is treated as stable.
    ///
    /// # Errors
    ///
    /// - configuration error when the week's template, a default exercise, or
    ///   a starting load is missing or unusable
    /// - data integrity error when history names an exercise missing from the
    ///   library or an entry is malformed
    pub fn suggest_session(
        &self,
        history: &[SessionHistoryEntry],
        week_type: Option<WeekType>,
        trend: Option<LoadTrend>,
    ) -> AppResult<SessionSuggestion> {
        self.check_history(history)?;

        let week_type = week_type.unwrap_or_else(|| self.default_week_type(history));
        let template = self.template_for(week_type)?;

        let exercises = template
            .slots
            .iter()
            .map(|slot| {
                let exercise = self.select_exercise(slot, history)?;
                self.suggest_load(exercise, slot, history, trend)
            })
            .collect::<AppResult<Vec<_>>>()?;

        debug!(
            %week_type,
            trend = trend.map(LoadTrend::as_str),
            history = history.len(),
            slots = exercises.len(),
            "Planned session"
        );

        Ok(SessionSuggestion {
            week_type,
            trend,
            exercises,
        })
    }

    /// Week type used when the caller does not pass one
    ///
    /// Alternates from the latest history entry carrying a week type (same
    /// date: the later entry in input order). Without any, the configured
    /// fallback week type is used.
    #[must_use]
    pub fn default_week_type(&self, history: &[SessionHistoryEntry]) -> WeekType {
        history
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                entry
                    .week_type
                    .map(|week_type| (entry.date, position, week_type))
            })
            .max_by_key(|(date, position, _)| (*date, *position))
            .map_or(self.config.fallback_week_type, |(_, _, week_type)| {
                week_type.alternate()
            })
    }

    fn check_history(&self, history: &[SessionHistoryEntry]) -> AppResult<()> {
        for entry in history {
            entry.validate()?;
            if !self.library.contains(&entry.exercise) {
                return Err(AppError::unknown_exercise(entry.exercise.clone()));
            }
        }
        Ok(())
    }

    fn template_for(&self, week_type: WeekType) -> AppResult<&'a SessionTemplate> {
        let template = self.config.templates.get(&week_type).ok_or_else(|| {
            AppError::config_missing(format!("no session template for week type '{week_type}'"))
                .with_resource_id(week_type.as_str())
        })?;
        if template.slots.is_empty() {
            return Err(AppError::config_invalid(format!(
                "session template for week type '{week_type}' has no slots"
            ))
            .with_resource_id(week_type.as_str()));
        }
        Ok(template)
    }

    fn select_exercise(
        &self,
        slot: &TemplateSlot,
        history: &[SessionHistoryEntry],
    ) -> AppResult<&'a Exercise> {
        let pattern = slot.movement_pattern.as_str();

        // Latest date wins; same-date ties go to the alphabetically smaller name
        let recent = history
            .iter()
            .filter_map(|entry| {
                self.library
                    .get(&entry.exercise)
                    .filter(|exercise| exercise.trains(pattern))
                    .map(|exercise| (entry.date, exercise))
            })
            .max_by(|(a_date, a), (b_date, b)| {
                a_date.cmp(b_date).then_with(|| b.name.cmp(&a.name))
            });
        if let Some((_, exercise)) = recent {
            return Ok(exercise);
        }

        if let Some(name) = self.config.default_exercises.get(pattern) {
            return self.library.get(name).ok_or_else(|| {
                AppError::config_invalid(format!(
                    "default exercise '{name}' for movement pattern '{pattern}' is not in the exercise library"
                ))
                .with_resource_id(name.clone())
            });
        }

        let library: &'a ExerciseLibrary = self.library;
        library
            .by_movement_pattern(pattern)
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::config_missing(format!(
                    "no exercise available for movement pattern '{pattern}'"
                ))
                .with_resource_id(pattern)
            })
    }

    fn suggest_load(
        &self,
        exercise: &Exercise,
        slot: &TemplateSlot,
        history: &[SessionHistoryEntry],
        trend: Option<LoadTrend>,
    ) -> AppResult<ExerciseSuggestion> {
        let last_entry = history
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.exercise == exercise.name)
            .max_by_key(|(position, entry)| (entry.date, *position))
            .map(|(_, entry)| entry);

        let (suggested_load, rationale, previous_load) = match last_entry {
            None => {
                let starting = self.config.starting_loads.lookup(exercise).ok_or_else(|| {
                    AppError::config_missing(format!(
                        "no starting load for exercise '{}' or category '{}'",
                        exercise.name, exercise.category
                    ))
                    .with_resource_id(exercise.name.clone())
                })?;
                (starting, SuggestionRationale::StartingLoad, None)
            }
            Some(entry) => {
                let last_load = entry.top_load();
                let (load, rationale) = self.progress(entry, slot, last_load, trend);
                (load, rationale, Some(last_load))
            }
        };

        debug!(
            exercise = %exercise.name,
            pattern = %slot.movement_pattern,
            suggested_load,
            %rationale,
            "Suggested load"
        );

        Ok(ExerciseSuggestion {
            exercise: exercise.name.clone(),
            movement_pattern: slot.movement_pattern.clone(),
            suggested_load,
            suggested_sets: slot.sets,
            suggested_reps: slot.reps,
            rationale,
            previous_load,
        })
    }

    /// Progressive overload with the fatigue guard applied on top
    ///
    /// A zero last load cannot be scaled up, so it holds.
    fn progress(
        &self,
        last: &SessionHistoryEntry,
        slot: &TemplateSlot,
        last_load: f64,
        trend: Option<LoadTrend>,
    ) -> (f64, SuggestionRationale) {
        if trend.unwrap_or(LoadTrend::Stable) == self.config.fatigue_guard_trend {
            return (last_load, SuggestionRationale::FatigueDeload);
        }

        let target_reps = last.prescribed_reps.unwrap_or(slot.reps);
        if last_load > 0.0 && last.completed_all_reps(target_reps) {
            (
                last_load * self.config.increment_factor,
                SuggestionRationale::Progression,
            )
        } else {
            (last_load, SuggestionRationale::Hold)
        }
    }
}
