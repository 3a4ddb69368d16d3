// ABOUTME: Plan generation and retry-pipeline configuration
// ABOUTME: Session timing used to size training days and the generate-validate attempt budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::constants::session::{
    DEFAULT_SESSION_MINUTES, MINUTES_PER_EXERCISE, MIN_MINUTES_PER_EXERCISE, WARM_UP_MINUTES,
};
use serde::{Deserialize, Serialize};

/// Plan generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Session length assumed when the request does not state one
    pub default_session_minutes: u32,
    /// Warm-up allowance subtracted before sizing a day
    pub warm_up_minutes: u32,
    /// Planned minutes per exercise (all sets plus rest)
    pub minutes_per_exercise: u32,
    /// Shortest per-exercise duration the validator accepts
    pub min_minutes_per_exercise: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_session_minutes: DEFAULT_SESSION_MINUTES,
            warm_up_minutes: WARM_UP_MINUTES,
            minutes_per_exercise: MINUTES_PER_EXERCISE,
            min_minutes_per_exercise: MIN_MINUTES_PER_EXERCISE,
        }
    }
}

/// Generate-validate-retry pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Candidate plans generated before giving up
    pub max_attempts: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}
