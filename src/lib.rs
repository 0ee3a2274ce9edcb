// ABOUTME: Main library entry point for the Trainwise training engine service
// ABOUTME: Wires data providers, configuration, and logging around the load and planning engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainwise
//!
//! Training load aggregation and next-session suggestions for a personal
//! fitness backend.
//!
//! ## Architecture
//!
//! - **`trainwise-core`**: errors, domain models, engine constants
//! - **`trainwise-intelligence`**: the synchronous engine (load aggregator,
//!   session planner) and its configuration
//! - **this crate**: provider traits and stores, the [`services::TrainingService`]
//!   orchestration, environment configuration, logging, and the
//!   `trainwise-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use trainwise::intelligence::IntelligenceConfig;
//! use trainwise::providers::InMemoryTrainingStore;
//! use trainwise::services::TrainingService;
//!
//! # async fn example() -> trainwise::errors::AppResult<()> {
//! let store = InMemoryTrainingStore::with_default_library();
//! let service = TrainingService::new(store, IntelligenceConfig::default());
//!
//! let as_of = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap_or_default();
//! let overview = service.training_overview(as_of, None).await?;
//! println!("{}", overview.summary.trend);
//! # Ok(())
//! # }
//! ```

/// Environment and service configuration
pub mod config;

/// Service names and environment variable names
pub mod constants;

/// Training engine re-exported from `trainwise-intelligence`
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Data access traits and stores
pub mod providers;

/// Service orchestration over providers and the engine
pub mod services;

// Re-export trainwise-core modules to preserve `crate::errors` / `crate::models` paths
pub use trainwise_core::errors;
pub use trainwise_core::models;
