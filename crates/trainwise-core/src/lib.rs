// ABOUTME: Core types and constants for the Trainwise training engine
// ABOUTME: Foundation crate with error handling, domain models, and engine defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainwise Core
//!
//! Foundation crate providing shared types and constants for the training load
//! and session suggestion engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Out-of-the-box engine values (windows, trend bands, progression)
//! - **models**: Training records, exercises, session history, and suggestion types

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine default values organized by domain
pub mod constants;

/// Core data models (`TrainingRecord`, `Exercise`, `SessionHistoryEntry`, etc.)
pub mod models;
