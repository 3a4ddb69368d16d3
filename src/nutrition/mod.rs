// ABOUTME: Nutrition plan checks applied after generation
// ABOUTME: Body composition estimates, protein correction and objective interpretation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Body-fat, lean-mass and protein-ceiling estimates
pub mod body_composition;
/// Protein target corrector
pub mod corrector;
/// Objective interpreter
pub mod objective;

pub use body_composition::{protein_ceiling, ProteinCeiling};
pub use corrector::{validate_and_correct_nutrition, NutritionCorrection};
pub use objective::{interpret_objective, ObjectiveInterpretation};
