// ABOUTME: Cardio progression policy deriving safe initial frequency and intensity
// ABOUTME: Caps sedentary at-risk profiles and enforces the combined weekly stimulus ceiling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Cardio Progression Policy
//!
//! | Profile | Frequency | Intensity |
//! |---|---|---|
//! | IMC >= 35 and sedentary | `min(requested, 2)` | "leve" |
//! | IMC >= 35 | requested, reduced so cardio + strength <= 6 | requested |
//! | otherwise | requested | requested |
//!
//! Strength frequency is never reduced.

use crate::config::{CardioPolicyConfig, EngineConfig};
use fitplan_core::models::{normalize_label, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Initial cardio prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardioProgression {
    /// Cardio sessions per week to start with
    pub initial_frequency: u8,
    /// Cardio intensity to start with
    pub initial_intensity: String,
    /// Cardio plus strength sessions per week
    pub weekly_sessions: u8,
}

/// Whether an activity label describes a sedentary lifestyle
#[must_use]
pub fn is_sedentary(activity_label: &str) -> bool {
    normalize_label(activity_label).contains("sedent")
}

/// Initial cardio prescription using the global configuration
#[must_use]
pub fn determine_cardio_progression(profile: &UserProfile) -> CardioProgression {
    determine_cardio_progression_with_config(profile, &EngineConfig::global().cardio)
}

/// Initial cardio prescription
#[must_use]
pub fn determine_cardio_progression_with_config(
    profile: &UserProfile,
    config: &CardioPolicyConfig,
) -> CardioProgression {
    let requested_frequency = profile.cardio_frequency.unwrap_or(config.default_frequency);
    let requested_intensity = profile
        .cardio_intensity
        .as_deref()
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .unwrap_or(config.default_intensity.as_str())
        .to_owned();
    let training_frequency = profile.training_frequency.unwrap_or(0);

    let imc = profile.imc();
    let at_risk = imc >= config.at_risk_imc;
    if !at_risk {
        debug!(imc, "Cardio request outside at-risk band, passing through");
        return CardioProgression {
            initial_frequency: requested_frequency,
            initial_intensity: requested_intensity,
            weekly_sessions: requested_frequency.saturating_add(training_frequency),
        };
    }

    let sedentary = is_sedentary(&profile.nivel_atividade);
    let (mut frequency, intensity) = if sedentary {
        (
            requested_frequency.min(config.at_risk_max_frequency),
            config.light_intensity.clone(),
        )
    } else {
        (requested_frequency, requested_intensity)
    };

    let cardio_budget = config
        .combined_stimulus_ceiling
        .saturating_sub(training_frequency);
    frequency = frequency.min(cardio_budget);

    info!(
        imc,
        sedentary,
        requested_frequency,
        initial_frequency = frequency,
        training_frequency,
        "At-risk cardio progression applied"
    );
    CardioProgression {
        initial_frequency: frequency,
        initial_intensity: intensity,
        weekly_sessions: frequency.saturating_add(training_frequency),
    }
}
