// ABOUTME: Core types and constants for the fitness plan engine
// ABOUTME: Foundation crate with error handling, data model, and engine-wide constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing shared types and constants for the plan
//! construction engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Engine-wide bounds and physiological coefficients
//! - **models**: Exercises, training plans, nutrition plans, user profiles and rejection records

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Core data models (Exercise, TrainingPlan, NutritionPlan, UserProfile, ...)
pub mod models;
