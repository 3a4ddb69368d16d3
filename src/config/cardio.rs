// ABOUTME: Cardio progression policy configuration
// ABOUTME: At-risk IMC band, initial frequency cap and combined weekly stimulus ceiling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::constants::cardio::{
    AT_RISK_IMC, AT_RISK_MAX_FREQUENCY, COMBINED_STIMULUS_CEILING, DEFAULT_FREQUENCY,
    DEFAULT_INTENSITY, LIGHT_INTENSITY,
};
use serde::{Deserialize, Serialize};

/// Cardio progression configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardioPolicyConfig {
    /// IMC from which a profile is at-risk (35)
    pub at_risk_imc: f64,
    /// Initial cardio sessions per week for sedentary at-risk profiles (2)
    pub at_risk_max_frequency: u8,
    /// Ceiling on cardio plus strength sessions per week for at-risk profiles (6)
    pub combined_stimulus_ceiling: u8,
    /// Cardio frequency when the profile requests none
    pub default_frequency: u8,
    /// Intensity forced on sedentary at-risk profiles
    pub light_intensity: String,
    /// Intensity when the profile requests none
    pub default_intensity: String,
}

impl Default for CardioPolicyConfig {
    fn default() -> Self {
        Self {
            at_risk_imc: AT_RISK_IMC,
            at_risk_max_frequency: AT_RISK_MAX_FREQUENCY,
            combined_stimulus_ceiling: COMBINED_STIMULUS_CEILING,
            default_frequency: DEFAULT_FREQUENCY,
            light_intensity: LIGHT_INTENSITY.to_owned(),
            default_intensity: DEFAULT_INTENSITY.to_owned(),
        }
    }
}
