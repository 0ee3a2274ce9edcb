// ABOUTME: Configuration module for the Trainwise service layer
// ABOUTME: Environment-driven service settings; engine configuration lives in trainwise-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variables, deployment modes, and data file locations
pub mod environment;

/// Engine configuration re-exported from `trainwise-intelligence`
pub use trainwise_intelligence::config::intelligence;

pub use environment::{DataPaths, Environment, LogLevel, ServiceConfig};
