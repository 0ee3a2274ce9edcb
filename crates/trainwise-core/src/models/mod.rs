// ABOUTME: Core data models for training records, exercises, and session planning
// ABOUTME: Re-exports the training, exercise, and session submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data consumed and produced by the training engine. Historical inputs
//! (`TrainingRecord`, `SessionHistoryEntry`) are read-only to the engine;
//! outputs (`LoadSummary`, `SessionSuggestion`) are recomputed on every call
//! and never persisted by it.

/// Exercise reference data and the exercise library
pub mod exercise;
/// Session history, week types, and session suggestions
pub mod session;
/// Dated training records, window statistics, and load trends
pub mod training;

pub use exercise::{Exercise, ExerciseLibrary};
pub use session::{
    ExerciseSuggestion, SessionHistoryEntry, SessionSuggestion, SuggestionRationale, WeekType,
};
pub use training::{DateRange, LoadSummary, LoadTrend, TrainingRecord, WindowStats};
