// ABOUTME: Configuration module for trainwise-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (load trend, session planner)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
