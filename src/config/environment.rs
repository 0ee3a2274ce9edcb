// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, data paths, and engine config loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the service glue

use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;
use trainwise_core::errors::AppResult;
use trainwise_intelligence::IntelligenceConfig;

use crate::constants::env_vars;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Locations of the JSON data files backing the file store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPaths {
    /// Training records file
    pub records: Option<PathBuf>,
    /// Session history file
    pub history: Option<PathBuf>,
    /// Exercise reference data file; the built-in catalog is used when absent
    pub catalog: Option<PathBuf>,
}

/// Service configuration loaded from the environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Data file locations
    pub data: DataPaths,
    /// Optional JSON file replacing the session planner configuration
    pub planner_config_path: Option<PathBuf>,
}

impl ServiceConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let path = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty()).map(PathBuf::from);

        let config = Self {
            environment: env::var(env_vars::ENVIRONMENT)
                .map(|v| Environment::from_str_or_default(&v))
                .unwrap_or_default(),
            log_level: env::var(env_vars::RUST_LOG)
                .map(|v| LogLevel::from_str_or_default(&v))
                .unwrap_or_default(),
            data: DataPaths {
                records: path(env_vars::RECORDS_PATH),
                history: path(env_vars::HISTORY_PATH),
                catalog: path(env_vars::CATALOG_PATH),
            },
            planner_config_path: path(env_vars::PLANNER_CONFIG_PATH),
        };

        info!(
            environment = %config.environment,
            log_level = %config.log_level,
            planner_config = ?config.planner_config_path,
            "Service configuration loaded"
        );
        config
    }

    /// Build the engine configuration: planner file when configured, else defaults,
    /// with environment overrides applied and validated
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the planner file is unreadable or any
    /// value fails validation
    pub fn intelligence_config(&self) -> AppResult<IntelligenceConfig> {
        let config = match &self.planner_config_path {
            Some(path) => IntelligenceConfig::load_with_planner_file(path)?,
            None => IntelligenceConfig::load()?,
        };
        Ok(config)
    }
}
