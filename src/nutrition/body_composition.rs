// ABOUTME: Body-fat and lean-mass estimation from IMC, age and gender
// ABOUTME: Derives the protein ceiling used by the nutrition corrector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition
//!
//! Body fat is estimated with the Deurenberg equation, which is monotonic in
//! IMC and has separate curves by sex.
//!
//! # Scientific References
//!
//! - Deurenberg, P., Weststrate, J.A., & Seidell, J.C. (1991). Body mass index as
//!   a measure of body fatness: age- and sex-specific prediction formulas.
//!   *British Journal of Nutrition*, 65(2), 105-114.
//!   <https://doi.org/10.1079/BJN19910073>

use crate::config::NutritionPolicyConfig;
use fitplan_core::models::{Gender, UserProfile};
use serde::{Deserialize, Serialize};

/// Deurenberg sex coefficient: 1 for men, 0 for women, midpoint otherwise
const fn sex_coefficient(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 1.0,
        Gender::Female => 0.0,
        Gender::Other => 0.5,
    }
}

/// Estimated body fat percentage
///
/// Formula: `BF% = 1.20 × IMC + 0.23 × age − 10.8 × sex − 5.4`, clamped to the
/// configured range.
#[must_use]
pub fn estimate_body_fat_percent(
    imc: f64,
    age: u32,
    gender: Gender,
    config: &NutritionPolicyConfig,
) -> f64 {
    let raw = 1.20f64.mul_add(
        imc,
        0.23f64.mul_add(f64::from(age), -10.8 * sex_coefficient(gender)),
    ) - 5.4;
    if raw.is_finite() {
        raw.clamp(config.min_body_fat_percent, config.max_body_fat_percent)
    } else {
        config.max_body_fat_percent
    }
}

/// Lean body mass in kilograms
///
/// Formula: `LBM = weight × (1 − BF% / 100)`
#[must_use]
pub fn lean_body_mass_kg(weight_kg: f64, body_fat_percent: f64) -> f64 {
    (weight_kg * (1.0 - body_fat_percent / 100.0)).max(0.0)
}

/// Body composition estimate and the protein ceiling it implies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinCeiling {
    /// Estimated body fat percentage
    pub estimated_body_fat_percent: f64,
    /// Estimated lean body mass in kilograms
    pub lean_body_mass_kg: f64,
    /// Most protein grams per day the plan may prescribe
    pub cap_g: u32,
    /// Whether the absolute obesity-range cap replaced the lean-mass formula
    pub absolute_cap_applied: bool,
}

/// Protein ceiling for a profile
///
/// Below the obesity IMC threshold the lean-mass formula is authoritative;
/// from the threshold upward a fixed per-gender cap applies instead.
#[must_use]
pub fn protein_ceiling(profile: &UserProfile, config: &NutritionPolicyConfig) -> ProteinCeiling {
    let imc = profile.imc();
    let gender = profile.gender();
    let estimated_body_fat_percent = estimate_body_fat_percent(imc, profile.age, gender, config);
    let lean_body_mass_kg = lean_body_mass_kg(profile.weight, estimated_body_fat_percent);

    let absolute_cap_applied = imc >= config.obesity_imc_threshold;
    let cap_g = if absolute_cap_applied {
        config.obese_protein_cap_g(gender)
    } else {
        (lean_body_mass_kg * config.protein_ceiling_g_per_kg_lean_mass).floor() as u32
    };

    ProteinCeiling {
        estimated_body_fat_percent,
        lean_body_mass_kg,
        cap_g,
        absolute_cap_applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_fat_rises_with_imc() {
        let config = NutritionPolicyConfig::default();
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            let low = estimate_body_fat_percent(22.0, 30, gender, &config);
            let high = estimate_body_fat_percent(32.0, 30, gender, &config);
            assert!(high > low);
        }
    }

    #[test]
    fn test_female_curve_above_male_curve() {
        let config = NutritionPolicyConfig::default();
        let male = estimate_body_fat_percent(25.0, 30, Gender::Male, &config);
        let female = estimate_body_fat_percent(25.0, 30, Gender::Female, &config);
        assert!(female > male);
    }

    #[test]
    fn test_estimate_is_clamped() {
        let config = NutritionPolicyConfig::default();
        assert!(
            (estimate_body_fat_percent(90.0, 80, Gender::Female, &config) - 60.0).abs()
                < f64::EPSILON
        );
        assert!(
            (estimate_body_fat_percent(5.0, 18, Gender::Male, &config) - 3.0).abs() < f64::EPSILON
        );
    }

    #[test]
    fn test_lean_mass() {
        assert!((lean_body_mass_kg(80.0, 25.0) - 60.0).abs() < 1e-9);
    }
}
