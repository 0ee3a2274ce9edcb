// ABOUTME: JSON file backed training data store used by the command-line tool
// ABOUTME: Reads records, history, and exercise catalog exports from disk with tokio::fs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # JSON File Store
//!
//! Each collection lives in its own file holding a JSON array. Files are read
//! on every fetch so edits show up without restarting. An unconfigured records
//! or history file reads as empty; an unconfigured catalog falls back to
//! [`ExerciseLibrary::with_defaults`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::{debug, info};
use trainwise_core::errors::{AppError, AppResult};
use trainwise_core::models::{DateRange, ExerciseLibrary, SessionHistoryEntry, TrainingRecord};

use super::{ExerciseCatalogProvider, SessionHistoryProvider, TrainingRecordProvider};
use crate::config::DataPaths;

/// Store reading each collection from a JSON file
#[derive(Debug, Clone, Default)]
pub struct JsonFileStore {
    records_path: Option<PathBuf>,
    history_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
}

impl JsonFileStore {
    /// Create a store with no files configured
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from configured data paths
    #[must_use]
    pub fn from_paths(paths: &DataPaths) -> Self {
        Self {
            records_path: paths.records.clone(),
            history_path: paths.history.clone(),
            catalog_path: paths.catalog.clone(),
        }
    }

    /// Set the training records file
    #[must_use]
    pub fn with_records(mut self, path: impl Into<PathBuf>) -> Self {
        self.records_path = Some(path.into());
        self
    }

    /// Set the session history file
    #[must_use]
    pub fn with_history(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = Some(path.into());
        self
    }

    /// Set the exercise catalog file
    #[must_use]
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
        let raw = fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read {}: {e}", path.display()))
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::serialization(format!("Failed to parse {}: {e}", path.display()))
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })
    }

    async fn read_collection<T: DeserializeOwned>(path: Option<&Path>) -> AppResult<Vec<T>> {
        match path {
            Some(path) => Self::read_json(path).await,
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl TrainingRecordProvider for JsonFileStore {
    async fn fetch_records(&self, range: DateRange) -> AppResult<Vec<TrainingRecord>> {
        let mut records: Vec<TrainingRecord> =
            Self::read_collection(self.records_path.as_deref()).await?;
        records.retain(|r| range.contains(r.date));
        debug!(
            path = ?self.records_path,
            count = records.len(),
            "Loaded training records"
        );
        Ok(records)
    }
}

#[async_trait]
impl SessionHistoryProvider for JsonFileStore {
    async fn fetch_history(&self, range: DateRange) -> AppResult<Vec<SessionHistoryEntry>> {
        let mut entries: Vec<SessionHistoryEntry> =
            Self::read_collection(self.history_path.as_deref()).await?;
        entries.retain(|e| range.contains(e.date));
        debug!(
            path = ?self.history_path,
            count = entries.len(),
            "Loaded session history"
        );
        Ok(entries)
    }
}

#[async_trait]
impl ExerciseCatalogProvider for JsonFileStore {
    async fn exercise_library(&self) -> AppResult<ExerciseLibrary> {
        match &self.catalog_path {
            Some(path) => {
                let library: ExerciseLibrary = Self::read_json(path).await?;
                info!(path = %path.display(), exercises = library.len(), "Loaded exercise catalog");
                Ok(library)
            }
            None => Ok(ExerciseLibrary::with_defaults()),
        }
    }
}
