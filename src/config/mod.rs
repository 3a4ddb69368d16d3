// ABOUTME: Engine configuration root with environment overrides and a global instance
// ABOUTME: Aggregates generator, nutrition, cardio, metrics and pipeline settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine configuration.
//!
//! Defaults come from `fitplan_core::constants`; any value can be overridden
//! with a `FITPLAN_*` environment variable. `EngineConfig::global()` loads once
//! and falls back to defaults (with a warning) when loading fails.

/// Cardio progression settings
pub mod cardio;
/// Configuration error types
pub mod error;
/// Rejection metrics settings
pub mod metrics;
/// Nutrition correction settings
pub mod nutrition;
/// Generator and pipeline settings
pub mod training;

pub use cardio::CardioPolicyConfig;
pub use error::ConfigError;
pub use metrics::MetricsConfig;
pub use nutrition::NutritionPolicyConfig;
pub use training::{GeneratorConfig, PipelineConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Plan generator settings
    pub generator: GeneratorConfig,
    /// Nutrition corrector and objective interpreter settings
    pub nutrition: NutritionPolicyConfig,
    /// Cardio progression settings
    pub cardio: CardioPolicyConfig,
    /// Rejection metrics settings
    pub metrics: MetricsConfig,
    /// Retry pipeline settings
    pub pipeline: PipelineConfig,
}

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let generator = &self.generator;
        if generator.minutes_per_exercise == 0 || generator.min_minutes_per_exercise == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "minutes per exercise must be positive",
            ));
        }
        if generator.min_minutes_per_exercise > generator.minutes_per_exercise {
            return Err(ConfigError::InvalidRange(
                "min_minutes_per_exercise must be <= minutes_per_exercise",
            ));
        }

        let nutrition = &self.nutrition;
        if !(0.5..=4.0).contains(&nutrition.protein_ceiling_g_per_kg_lean_mass) {
            return Err(ConfigError::ValueOutOfRange(
                "protein ceiling must be between 0.5 and 4.0 g/kg lean mass",
            ));
        }
        if nutrition.min_body_fat_percent >= nutrition.max_body_fat_percent {
            return Err(ConfigError::InvalidRange(
                "min_body_fat_percent must be < max_body_fat_percent",
            ));
        }
        if nutrition.obesity_imc_threshold <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "obesity_imc_threshold must be positive",
            ));
        }

        let cardio = &self.cardio;
        if cardio.at_risk_max_frequency > cardio.combined_stimulus_ceiling {
            return Err(ConfigError::InvalidRange(
                "at_risk_max_frequency must be <= combined_stimulus_ceiling",
            ));
        }
        if cardio.at_risk_max_frequency > 7 || cardio.default_frequency > 7 {
            return Err(ConfigError::ValueOutOfRange(
                "cardio frequencies must not exceed 7 sessions per week",
            ));
        }

        if self.pipeline.max_attempts == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "pipeline max_attempts must be at least 1",
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Generator overrides
        env_override(
            "FITPLAN_DEFAULT_SESSION_MINUTES",
            &mut self.generator.default_session_minutes,
        )?;
        env_override(
            "FITPLAN_MINUTES_PER_EXERCISE",
            &mut self.generator.minutes_per_exercise,
        )?;
        env_override(
            "FITPLAN_MIN_MINUTES_PER_EXERCISE",
            &mut self.generator.min_minutes_per_exercise,
        )?;

        // Nutrition overrides
        env_override(
            "FITPLAN_PROTEIN_CEILING_G_PER_KG",
            &mut self.nutrition.protein_ceiling_g_per_kg_lean_mass,
        )?;
        env_override(
            "FITPLAN_OBESITY_IMC_THRESHOLD",
            &mut self.nutrition.obesity_imc_threshold,
        )?;
        env_override(
            "FITPLAN_OBESE_FEMALE_PROTEIN_CAP_G",
            &mut self.nutrition.obese_female_protein_cap_g,
        )?;
        env_override(
            "FITPLAN_OBESE_MALE_PROTEIN_CAP_G",
            &mut self.nutrition.obese_male_protein_cap_g,
        )?;

        // Cardio overrides
        env_override("FITPLAN_CARDIO_AT_RISK_IMC", &mut self.cardio.at_risk_imc)?;
        env_override(
            "FITPLAN_CARDIO_COMBINED_CEILING",
            &mut self.cardio.combined_stimulus_ceiling,
        )?;

        // Metrics and pipeline overrides
        env_override(
            "FITPLAN_METRICS_MAX_EVENTS",
            &mut self.metrics.max_retained_events,
        )?;
        env_override(
            "FITPLAN_METRICS_PERSISTENCE",
            &mut self.metrics.persistence_enabled,
        )?;
        if let Ok(url) = env::var("FITPLAN_METRICS_DATABASE_URL") {
            self.metrics.database_url = Some(url);
        }
        env_override(
            "FITPLAN_PIPELINE_MAX_ATTEMPTS",
            &mut self.pipeline.max_attempts,
        )?;

        Ok(self)
    }
}

/// Replace `target` with the parsed value of `name` when the variable is set
fn env_override<T: FromStr>(name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))?;
    }
    Ok(())
}
