// ABOUTME: Training load aggregation and session suggestion engine
// ABOUTME: Pure synchronous algorithms over already-fetched history, plus their configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainwise Intelligence
//!
//! Two cooperating components, evaluated on demand:
//!
//! - [`LoadAggregator`]: trailing-window load statistics and a trend
//!   classification with hysteresis bands
//! - [`SessionPlanner`]: next-session exercise selection and progressive
//!   overload load suggestions, guarded by the aggregator's trend
//!
//! Data flows one way: records feed the aggregator, its trend feeds the
//! planner. Neither component holds state between calls.

// Re-export trainwise-core modules so engine code can use `crate::errors` etc.
pub use trainwise_core::constants;
pub use trainwise_core::errors;
pub use trainwise_core::models;

/// Typed configuration for the engine
pub mod config;
/// Session suggestion planner
pub mod session_planner;
/// Rolling-window load aggregator
pub mod training_load;

pub use config::intelligence::{
    ConfigError, IntelligenceConfig, LoadTrendConfig, SessionPlannerConfig, SessionTemplate,
    StartingLoads, TemplateSlot,
};
pub use session_planner::SessionPlanner;
pub use training_load::LoadAggregator;
