// ABOUTME: In-memory training data store for tests and embedding applications
// ABOUTME: Holds records, history, and an exercise library behind tokio RwLocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # In-Memory Training Store
//!
//! Requires no files or network. Data is injected with the `add_*` methods and
//! returned in insertion order, filtered by date range.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use trainwise_core::errors::AppResult;
use trainwise_core::models::{
    DateRange, Exercise, ExerciseLibrary, SessionHistoryEntry, TrainingRecord,
};

use super::{ExerciseCatalogProvider, SessionHistoryProvider, TrainingRecordProvider};

/// Thread-safe in-memory store implementing every training data capability
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrainingStore {
    records: Arc<RwLock<Vec<TrainingRecord>>>,
    history: Arc<RwLock<Vec<SessionHistoryEntry>>>,
    library: Arc<RwLock<ExerciseLibrary>>,
}

impl InMemoryTrainingStore {
    /// Create an empty store with an empty exercise library
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store preloaded with the built-in exercise catalog
    #[must_use]
    pub fn with_default_library() -> Self {
        Self::with_library(ExerciseLibrary::with_defaults())
    }

    /// Create an empty store with the given exercise library
    #[must_use]
    pub fn with_library(library: ExerciseLibrary) -> Self {
        Self {
            library: Arc::new(RwLock::new(library)),
            ..Self::default()
        }
    }

    /// Append a training record
    pub async fn add_record(&self, record: TrainingRecord) {
        self.records.write().await.push(record);
    }

    /// Append several training records
    pub async fn extend_records(&self, records: impl IntoIterator<Item = TrainingRecord>) {
        self.records.write().await.extend(records);
    }

    /// Append a session history entry
    pub async fn add_history_entry(&self, entry: SessionHistoryEntry) {
        self.history.write().await.push(entry);
    }

    /// Add an exercise to the library
    ///
    /// # Errors
    ///
    /// Returns a data integrity error if an exercise with the same name exists
    pub async fn add_exercise(&self, exercise: Exercise) -> AppResult<()> {
        self.library.write().await.insert(exercise)
    }
}

#[async_trait]
impl TrainingRecordProvider for InMemoryTrainingStore {
    async fn fetch_records(&self, range: DateRange) -> AppResult<Vec<TrainingRecord>> {
        let records: Vec<TrainingRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| range.contains(r.date))
            .cloned()
            .collect();
        debug!(
            start = %range.start,
            end = %range.end,
            count = records.len(),
            "Fetched training records from memory"
        );
        Ok(records)
    }
}

#[async_trait]
impl SessionHistoryProvider for InMemoryTrainingStore {
    async fn fetch_history(&self, range: DateRange) -> AppResult<Vec<SessionHistoryEntry>> {
        let entries: Vec<SessionHistoryEntry> = self
            .history
            .read()
            .await
            .iter()
            .filter(|e| range.contains(e.date))
            .cloned()
            .collect();
        debug!(
            start = %range.start,
            end = %range.end,
            count = entries.len(),
            "Fetched session history from memory"
        );
        Ok(entries)
    }
}

#[async_trait]
impl ExerciseCatalogProvider for InMemoryTrainingStore {
    async fn exercise_library(&self) -> AppResult<ExerciseLibrary> {
        Ok(self.library.read().await.clone())
    }
}
