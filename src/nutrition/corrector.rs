// ABOUTME: Nutrition corrector that caps protein targets at the physiological ceiling
// ABOUTME: Rewrites only the protein macro; every other plan field passes through unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::body_composition::protein_ceiling;
use crate::config::{EngineConfig, NutritionPolicyConfig};
use fitplan_core::models::{parse_gram_quantity, NutritionPlan, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Corrected plan and what the corrector decided
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionCorrection {
    /// Plan after correction
    pub plan: NutritionPlan,
    /// Whether the protein target was rewritten
    pub was_adjusted: bool,
    /// Computed protein ceiling in grams
    pub protein_cap_g: u32,
    /// Body fat estimate behind the ceiling
    pub estimated_body_fat_percent: f64,
}

/// Cap the plan's protein target using the global configuration
#[must_use]
pub fn validate_and_correct_nutrition(
    plan: NutritionPlan,
    profile: &UserProfile,
) -> NutritionCorrection {
    validate_and_correct_nutrition_with_config(plan, profile, &EngineConfig::global().nutrition)
}

/// Cap the plan's protein target
///
/// A protein value that cannot be parsed as grams is replaced by the cap.
#[must_use]
pub fn validate_and_correct_nutrition_with_config(
    mut plan: NutritionPlan,
    profile: &UserProfile,
    config: &NutritionPolicyConfig,
) -> NutritionCorrection {
    let ceiling = protein_ceiling(profile, config);
    let cap = ceiling.cap_g;

    let was_adjusted = match parse_gram_quantity(&plan.macros.protein) {
        Some(protein) if protein > f64::from(cap) => {
            info!(
                requested_g = protein,
                cap_g = cap,
                absolute_cap = ceiling.absolute_cap_applied,
                "Protein target above physiological ceiling, capping"
            );
            true
        }
        Some(_) => false,
        None => {
            warn!(
                protein = %plan.macros.protein,
                cap_g = cap,
                "Unparseable protein target, replacing with ceiling"
            );
            true
        }
    };

    if was_adjusted {
        plan.macros.protein = format!("{cap}g");
    }

    NutritionCorrection {
        plan,
        was_adjusted,
        protein_cap_g: cap,
        estimated_body_fat_percent: ceiling.estimated_body_fat_percent,
    }
}
