// ABOUTME: Domain service layer wiring data providers to the training engine
// ABOUTME: Protocol-agnostic services reusable by the CLI and embedding applications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer

/// Load summaries and session suggestions over a training data store
pub mod training_service;

pub use training_service::{TrainingOverview, TrainingService};
