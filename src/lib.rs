// ABOUTME: Main library entry point for the fitness plan construction engine
// ABOUTME: Generates and validates weekly training plans and corrects nutrition plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Engine
//!
//! Rule-based core that builds weekly training plans, rejects candidates that
//! break count or distribution rules, and keeps nutrition targets inside
//! physiological limits. Every policy function is synchronous and pure; the
//! only shared state is the rejection recorder.
//!
//! ## Components
//!
//! - **catalog**: static exercises tagged by muscle, pattern, role and environment
//! - **training**: level profiles, distribution rules, generator and validator
//! - **nutrition**: body composition, protein correction, objective interpretation
//! - **cardio**: initial cardio frequency and intensity
//! - **metrics**: rejection counters and pluggable stores
//! - **pipeline**: generate, validate, record and retry
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan_engine::training::{
//!     generate_training_plan_structure, is_training_plan_usable, PlanRequest,
//! };
//!
//! let request = PlanRequest {
//!     training_location: Some("casa".to_owned()),
//!     ..PlanRequest::new(4, "Moderado")
//! };
//! let plan = generate_training_plan_structure(&request);
//! let usable = is_training_plan_usable(&plan, 4, request.level(), None);
//! println!("{} days, usable: {usable}", plan.weekly_schedule.len());
//! ```

/// Cardio progression policy
pub mod cardio;
/// Exercise catalog and location/injury filtering
pub mod catalog;
/// Engine configuration
pub mod config;
/// Structured logging setup
pub mod logging;
/// Rejection metrics recorder and stores
pub mod metrics;
/// Nutrition correction and objective interpretation
pub mod nutrition;
/// Generate-validate-retry pipeline
pub mod pipeline;
/// Training plan generation and validation
pub mod training;

pub use fitplan_core::{constants, errors, models};
