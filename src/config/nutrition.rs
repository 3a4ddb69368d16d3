// ABOUTME: Nutrition correction and objective interpretation configuration
// ABOUTME: Lean-mass protein ceiling, obesity caps, body-fat clamp and adiposity thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Policy Configuration
//!
//! # Scientific References
//!
//! - Body fat from BMI: Deurenberg, P., Weststrate, J.A., & Seidell, J.C. (1991).
//!   Body mass index as a measure of body fatness. *British Journal of Nutrition*, 65(2), 105-114.
//!   DOI: 10.1079/BJN19910073
//! - Protein ceiling: Morton, R.W., et al. (2018).
//!   *British Journal of Sports Medicine*, 52(6), 376-384.
//!   DOI: 10.1136/bjsports-2017-097608

use fitplan_core::constants::nutrition::{
    HIGH_ADIPOSITY_FEMALE_BF_PERCENT, HIGH_ADIPOSITY_MALE_BF_PERCENT,
    HIGH_ADIPOSITY_OTHER_BF_PERCENT, MAX_BODY_FAT_PERCENT, MIN_BODY_FAT_PERCENT,
    OBESE_FEMALE_PROTEIN_CAP_G, OBESE_MALE_PROTEIN_CAP_G, OBESE_OTHER_PROTEIN_CAP_G,
    OBESITY_IMC_THRESHOLD, PROTEIN_CEILING_G_PER_KG_LEAN_MASS,
};
use fitplan_core::models::Gender;
use serde::{Deserialize, Serialize};

/// Nutrition correction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionPolicyConfig {
    /// Protein grams per kilogram of lean body mass (2.2)
    pub protein_ceiling_g_per_kg_lean_mass: f64,
    /// IMC from which the absolute caps replace the lean-mass formula (30)
    pub obesity_imc_threshold: f64,
    /// Absolute protein cap for women in the obesity range
    pub obese_female_protein_cap_g: u32,
    /// Absolute protein cap for men in the obesity range
    pub obese_male_protein_cap_g: u32,
    /// Absolute protein cap when gender is not stated
    pub obese_other_protein_cap_g: u32,
    /// Lower clamp for estimated body fat (%)
    pub min_body_fat_percent: f64,
    /// Upper clamp for estimated body fat (%)
    pub max_body_fat_percent: f64,
    /// Male body fat (%) that redirects mass gain to recomposition
    pub high_adiposity_male_bf_percent: f64,
    /// Female body fat (%) that redirects mass gain to recomposition
    pub high_adiposity_female_bf_percent: f64,
    /// Body fat (%) that redirects mass gain when gender is not stated
    pub high_adiposity_other_bf_percent: f64,
}

impl NutritionPolicyConfig {
    /// Absolute protein cap for the given gender
    #[must_use]
    pub const fn obese_protein_cap_g(&self, gender: Gender) -> u32 {
        match gender {
            Gender::Male => self.obese_male_protein_cap_g,
            Gender::Female => self.obese_female_protein_cap_g,
            Gender::Other => self.obese_other_protein_cap_g,
        }
    }

    /// High-adiposity body-fat threshold for the given gender
    #[must_use]
    pub const fn high_adiposity_bf_percent(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.high_adiposity_male_bf_percent,
            Gender::Female => self.high_adiposity_female_bf_percent,
            Gender::Other => self.high_adiposity_other_bf_percent,
        }
    }
}

impl Default for NutritionPolicyConfig {
    fn default() -> Self {
        Self {
            protein_ceiling_g_per_kg_lean_mass: PROTEIN_CEILING_G_PER_KG_LEAN_MASS,
            obesity_imc_threshold: OBESITY_IMC_THRESHOLD,
            obese_female_protein_cap_g: OBESE_FEMALE_PROTEIN_CAP_G,
            obese_male_protein_cap_g: OBESE_MALE_PROTEIN_CAP_G,
            obese_other_protein_cap_g: OBESE_OTHER_PROTEIN_CAP_G,
            min_body_fat_percent: MIN_BODY_FAT_PERCENT,
            max_body_fat_percent: MAX_BODY_FAT_PERCENT,
            high_adiposity_male_bf_percent: HIGH_ADIPOSITY_MALE_BF_PERCENT,
            high_adiposity_female_bf_percent: HIGH_ADIPOSITY_FEMALE_BF_PERCENT,
            high_adiposity_other_bf_percent: HIGH_ADIPOSITY_OTHER_BF_PERCENT,
        }
    }
}
