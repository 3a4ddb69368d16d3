// ABOUTME: Training plan construction and validation
// ABOUTME: Profile resolution, distribution rules, plan generation and plan validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Weekly plan generator
pub mod generator;
/// Per-level technical profile and exercise-count policy
pub mod profile;
/// Declarative distribution and coverage rules
pub mod rules;
/// Plan validator
pub mod validator;

pub use generator::{generate_training_plan_structure, PlanRequest};
pub use profile::{
    resolve_activity_level, resolve_technical_profile, validate_exercises_count_by_level,
    TechnicalProfile,
};
pub use validator::{is_training_plan_usable, validate_training_plan, PlanRejection, PlanVerdict};
