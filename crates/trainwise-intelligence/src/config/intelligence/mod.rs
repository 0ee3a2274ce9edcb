// ABOUTME: Intelligence configuration for load aggregation and session planning
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Type-safe configuration for the training engine. Defaults reproduce the
//! out-of-the-box behavior; environment variables and an optional JSON file
//! for the planner tune it.
//!
//! # Module Structure
//!
//! - `load_trend` - trailing windows and trend hysteresis band
//! - `session_planner` - week templates, default exercises, starting loads, progression
//! - `error` - configuration validation errors

pub mod error;
pub mod load_trend;
pub mod session_planner;

pub use error::ConfigError;
pub use load_trend::LoadTrendConfig;
pub use session_planner::{SessionPlannerConfig, SessionTemplate, StartingLoads, TemplateSlot};

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntelligenceConfig {
    /// Configuration for the rolling-window load aggregator
    pub load_trend: LoadTrendConfig,
    /// Configuration for the session suggestion planner
    pub session_planner: SessionPlannerConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, replacing the planner section with a JSON file
    ///
    /// Environment overrides are applied on top of the file contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or validation fails
    pub fn load_with_planner_file(path: &Path) -> Result<Self, ConfigError> {
        let planner = SessionPlannerConfig::from_json_file(path)?;
        let config = Self {
            load_trend: LoadTrendConfig::default(),
            session_planner: planner,
        }
        .apply_env_overrides()?;
        config.validate()?;
        info!(
            path = %path.display(),
            templates = config.session_planner.templates.len(),
            "Loaded session planner config file"
        );
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.load_trend.validate()?;
        self.session_planner.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Load aggregator overrides
        Self::apply_env_var(
            "INTELLIGENCE_LOAD_SHORT_WINDOW_DAYS",
            &mut self.load_trend.short_window_days,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_LOAD_LONG_WINDOW_DAYS",
            &mut self.load_trend.long_window_days,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_LOAD_INCREASE_RATIO",
            &mut self.load_trend.increase_ratio,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_LOAD_DECREASE_RATIO",
            &mut self.load_trend.decrease_ratio,
        )?;

        // Session planner overrides
        Self::apply_env_var(
            "INTELLIGENCE_PLANNER_INCREMENT_FACTOR",
            &mut self.session_planner.increment_factor,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_PLANNER_FATIGUE_GUARD_TREND",
            &mut self.session_planner.fatigue_guard_trend,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_PLANNER_FALLBACK_WEEK_TYPE",
            &mut self.session_planner.fallback_week_type,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_PLANNER_HISTORY_LOOKBACK_DAYS",
            &mut self.session_planner.history_lookback_days,
        )?;

        Ok(self)
    }
}

impl SessionPlannerConfig {
    /// Read a planner configuration from a JSON file
    ///
    /// Fields missing from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::File` when the file cannot be read and
    /// `ConfigError::Parse` when it is not valid planner JSON
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::File(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))
    }
}
