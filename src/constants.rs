// ABOUTME: Service-level constants for the Trainwise glue layer
// ABOUTME: Service names and environment variable names read by the config layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service constants
//!
//! Engine defaults live in `trainwise_core::constants`; this module only holds
//! what the surrounding service needs.

pub use trainwise_core::constants::*;

/// Service names used in structured logs
pub mod service_names {
    /// Library / service name
    pub const TRAINWISE: &str = "trainwise";
    /// Command-line tool name
    pub const TRAINWISE_CLI: &str = "trainwise-cli";
}

/// Environment variable names
pub mod env_vars {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include file and line in log output when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Include thread ids and names in log output when set
    pub const LOG_INCLUDE_THREAD: &str = "LOG_INCLUDE_THREAD";
    /// Service name override for structured logs
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
    /// JSON file with training records
    pub const RECORDS_PATH: &str = "TRAINWISE_RECORDS_PATH";
    /// JSON file with session history
    pub const HISTORY_PATH: &str = "TRAINWISE_HISTORY_PATH";
    /// JSON file with exercise reference data
    pub const CATALOG_PATH: &str = "TRAINWISE_CATALOG_PATH";
    /// JSON file replacing the session planner configuration
    pub const PLANNER_CONFIG_PATH: &str = "TRAINWISE_PLANNER_CONFIG";
}
