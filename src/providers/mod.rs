// ABOUTME: Data access capabilities consumed by the training service
// ABOUTME: Async traits for records, session history, and exercise reference data plus their stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Data Providers
//!
//! The engine never reads storage itself. The service fetches everything a
//! computation needs through these traits, once per invocation, and hands the
//! results to the engine.
//!
//! Two implementations ship with the crate:
//!
//! - [`InMemoryTrainingStore`]: seeded at runtime, used by tests and embedders
//! - [`JsonFileStore`]: reads JSON exports from disk, used by the CLI

use async_trait::async_trait;
use trainwise_core::errors::AppResult;
use trainwise_core::models::{DateRange, ExerciseLibrary, SessionHistoryEntry, TrainingRecord};

/// JSON file backed store
pub mod json_file;
/// In-memory store
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryTrainingStore;

/// Source of dated training records
#[async_trait]
pub trait TrainingRecordProvider: Send + Sync {
    /// Records whose date falls inside `range` (both ends inclusive)
    async fn fetch_records(&self, range: DateRange) -> AppResult<Vec<TrainingRecord>>;
}

/// Source of per-exercise strength session history
#[async_trait]
pub trait SessionHistoryProvider: Send + Sync {
    /// History entries whose date falls inside `range` (both ends inclusive)
    async fn fetch_history(&self, range: DateRange) -> AppResult<Vec<SessionHistoryEntry>>;
}

/// Source of exercise reference data
#[async_trait]
pub trait ExerciseCatalogProvider: Send + Sync {
    /// The full exercise library
    async fn exercise_library(&self) -> AppResult<ExerciseLibrary>;
}

/// Convenience bound for stores implementing every capability
pub trait TrainingDataStore:
    TrainingRecordProvider + SessionHistoryProvider + ExerciseCatalogProvider
{
}

impl<T> TrainingDataStore for T where
    T: TrainingRecordProvider + SessionHistoryProvider + ExerciseCatalogProvider
{
}
