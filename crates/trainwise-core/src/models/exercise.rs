// ABOUTME: Exercise reference data and the name-keyed exercise library
// ABOUTME: Includes the built-in catalog covering every default template slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::constants::exercise_categories::{BARBELL, BODYWEIGHT, DUMBBELL, KETTLEBELL, MACHINE};
use crate::constants::movement_patterns::{
    HINGE, HORIZONTAL_PULL, HORIZONTAL_PUSH, LUNGE, SQUAT, VERTICAL_PULL, VERTICAL_PUSH,
};
use crate::errors::{AppError, AppResult};

/// Exercise definition from reference data
///
/// Sets are ordered so that serialized output is stable across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique exercise name
    pub name: String,
    /// Category used for starting load lookup (barbell, dumbbell, ...)
    pub category: String,
    /// Movement pattern this exercise trains, if it fills a template slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement_pattern: Option<String>,
    /// Equipment needed
    #[serde(default)]
    pub equipment: BTreeSet<String>,
    /// Primary muscles worked
    #[serde(default)]
    pub primary_muscles: BTreeSet<String>,
}

impl Exercise {
    /// Create an exercise with no pattern, equipment, or muscles
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            movement_pattern: None,
            equipment: BTreeSet::new(),
            primary_muscles: BTreeSet::new(),
        }
    }

    /// Set the movement pattern
    #[must_use]
    pub fn movement_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.movement_pattern = Some(pattern.into());
        self
    }

    /// Add required equipment
    #[must_use]
    pub fn equipment(mut self, item: impl Into<String>) -> Self {
        self.equipment.insert(item.into());
        self
    }

    /// Add a primary muscle
    #[must_use]
    pub fn primary_muscle(mut self, muscle: impl Into<String>) -> Self {
        self.primary_muscles.insert(muscle.into());
        self
    }

    /// Whether this exercise fills slots of the given movement pattern
    #[must_use]
    pub fn trains(&self, pattern: &str) -> bool {
        self.movement_pattern.as_deref() == Some(pattern)
    }
}

/// Exercise reference data keyed by unique name
///
/// Iteration is alphabetical by name, which the planner relies on for
/// deterministic fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Exercise>", into = "Vec<Exercise>")]
pub struct ExerciseLibrary {
    exercises: BTreeMap<String, Exercise>,
}

impl ExerciseLibrary {
    /// Create an empty library
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exercises: BTreeMap::new(),
        }
    }

    /// Build a library from exercises
    ///
    /// # Errors
    ///
    /// Returns a data integrity error if two exercises share a name
    pub fn from_exercises(exercises: impl IntoIterator<Item = Exercise>) -> AppResult<Self> {
        let mut library = Self::new();
        for exercise in exercises {
            library.insert(exercise)?;
        }
        Ok(library)
    }

    /// Add an exercise
    ///
    /// # Errors
    ///
    /// Returns a data integrity error if the name is already taken
    pub fn insert(&mut self, exercise: Exercise) -> AppResult<()> {
        if self.exercises.contains_key(&exercise.name) {
            return Err(AppError::data_integrity(format!(
                "duplicate exercise name '{}'",
                exercise.name
            ))
            .with_resource_id(exercise.name));
        }
        self.exercises.insert(exercise.name.clone(), exercise);
        Ok(())
    }

    /// Look up an exercise by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Exercise> {
        self.exercises.get(name)
    }

    /// Whether an exercise with this name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.exercises.contains_key(name)
    }

    /// Exercises training a movement pattern, alphabetical by name
    #[must_use]
    pub fn by_movement_pattern(&self, pattern: &str) -> Vec<&Exercise> {
        self.exercises
            .values()
            .filter(|e| e.trains(pattern))
            .collect()
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the library has no exercises
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Built-in catalog covering the default week templates
    #[must_use]
    pub fn with_defaults() -> Self {
        let exercises = default_exercises()
            .into_iter()
            .map(|e| (e.name.clone(), e))
            .collect();
        Self { exercises }
    }
}

impl TryFrom<Vec<Exercise>> for ExerciseLibrary {
    type Error = AppError;

    fn try_from(exercises: Vec<Exercise>) -> Result<Self, Self::Error> {
        Self::from_exercises(exercises)
    }
}

impl From<ExerciseLibrary> for Vec<Exercise> {
    fn from(library: ExerciseLibrary) -> Self {
        library.exercises.into_values().collect()
    }
}

fn default_exercises() -> Vec<Exercise> {
    vec![
        Exercise::new("Back Squat", BARBELL)
            .movement_pattern(SQUAT)
            .equipment("barbell")
            .equipment("squat rack")
            .primary_muscle("quadriceps")
            .primary_muscle("glutes"),
        Exercise::new("Goblet Squat", KETTLEBELL)
            .movement_pattern(SQUAT)
            .equipment("kettlebell")
            .primary_muscle("quadriceps"),
        Exercise::new("Romanian Deadlift", BARBELL)
            .movement_pattern(HINGE)
            .equipment("barbell")
            .primary_muscle("hamstrings")
            .primary_muscle("glutes"),
        Exercise::new("Kettlebell Swing", KETTLEBELL)
            .movement_pattern(HINGE)
            .equipment("kettlebell")
            .primary_muscle("glutes"),
        Exercise::new("Bench Press", BARBELL)
            .movement_pattern(HORIZONTAL_PUSH)
            .equipment("barbell")
            .equipment("bench")
            .primary_muscle("chest")
            .primary_muscle("triceps"),
        Exercise::new("Push-up", BODYWEIGHT)
            .movement_pattern(HORIZONTAL_PUSH)
            .primary_muscle("chest"),
        Exercise::new("Overhead Press", BARBELL)
            .movement_pattern(VERTICAL_PUSH)
            .equipment("barbell")
            .primary_muscle("shoulders"),
        Exercise::new("Dumbbell Shoulder Press", DUMBBELL)
            .movement_pattern(VERTICAL_PUSH)
            .equipment("dumbbells")
            .primary_muscle("shoulders"),
        Exercise::new("Barbell Row", BARBELL)
            .movement_pattern(HORIZONTAL_PULL)
            .equipment("barbell")
            .primary_muscle("lats")
            .primary_muscle("upper back"),
        Exercise::new("Dumbbell Row", DUMBBELL)
            .movement_pattern(HORIZONTAL_PULL)
            .equipment("dumbbells")
            .equipment("bench")
            .primary_muscle("lats"),
        Exercise::new("Pull-up", BODYWEIGHT)
            .movement_pattern(VERTICAL_PULL)
            .equipment("pull-up bar")
            .primary_muscle("lats")
            .primary_muscle("biceps"),
        Exercise::new("Lat Pulldown", MACHINE)
            .movement_pattern(VERTICAL_PULL)
            .equipment("cable station")
            .primary_muscle("lats"),
        Exercise::new("Walking Lunge", DUMBBELL)
            .movement_pattern(LUNGE)
            .equipment("dumbbells")
            .primary_muscle("quadriceps")
            .primary_muscle("glutes"),
        Exercise::new("Plank", BODYWEIGHT).primary_muscle("core"),
    ]
}
