// ABOUTME: Intelligence module re-exports from the trainwise-intelligence crate
// ABOUTME: Keeps engine paths available as trainwise::intelligence for embedders and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Load aggregation and session planning, re-exported from
//! `trainwise-intelligence`.

pub use trainwise_intelligence::*;

// Submodules for path-based access (e.g., trainwise::intelligence::training_load::LoadAggregator)
pub use trainwise_intelligence::{config, session_planner, training_load};
