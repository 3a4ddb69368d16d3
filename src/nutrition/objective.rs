// ABOUTME: Objective interpreter that redirects mass gain to recomposition at high adiposity
// ABOUTME: Uses the same body-fat estimate as the nutrition corrector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::body_composition::estimate_body_fat_percent;
use crate::config::{EngineConfig, NutritionPolicyConfig};
use fitplan_core::constants::nutrition::RECOMPOSITION_OBJECTIVE;
use fitplan_core::models::{normalize_label, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Normalized fragments that mark a mass-gain objective
const MASS_GAIN_MARKERS: &[&str] = &[
    "ganhodemassa",
    "ganharmassa",
    "massamuscular",
    "hipertrofia",
    "bulking",
    "musclegain",
    "massgain",
];

/// Objective after interpretation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveInterpretation {
    /// Objective the plan should follow
    pub interpreted_objective: String,
    /// Whether the stated objective was replaced
    pub was_converted: bool,
}

/// Whether an objective label asks for mass gain
#[must_use]
pub fn is_mass_gain_objective(objective: &str) -> bool {
    let normalized = normalize_label(objective);
    MASS_GAIN_MARKERS
        .iter()
        .any(|marker| normalized.contains(marker))
}

/// Interpret the profile's objective using the global configuration
#[must_use]
pub fn interpret_objective(profile: &UserProfile) -> ObjectiveInterpretation {
    interpret_objective_with_config(profile, &EngineConfig::global().nutrition)
}

/// Interpret the profile's objective
///
/// Mass gain becomes recomposition when IMC is in the obesity range or the
/// estimated body fat reaches the gender's high-adiposity threshold.
#[must_use]
pub fn interpret_objective_with_config(
    profile: &UserProfile,
    config: &NutritionPolicyConfig,
) -> ObjectiveInterpretation {
    let passthrough = || ObjectiveInterpretation {
        interpreted_objective: profile.objective.clone(),
        was_converted: false,
    };
    if !is_mass_gain_objective(&profile.objective) {
        return passthrough();
    }

    let imc = profile.imc();
    let gender = profile.gender();
    let body_fat = estimate_body_fat_percent(imc, profile.age, gender, config);
    let high_adiposity = imc >= config.obesity_imc_threshold
        || body_fat >= config.high_adiposity_bf_percent(gender);
    if !high_adiposity {
        return passthrough();
    }

    info!(
        objective = %profile.objective,
        imc,
        body_fat_percent = body_fat,
        "Mass-gain objective redirected to recomposition"
    );
    ObjectiveInterpretation {
        interpreted_objective: RECOMPOSITION_OBJECTIVE.to_owned(),
        was_converted: true,
    }
}
