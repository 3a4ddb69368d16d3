// ABOUTME: Generate-validate-retry pipeline tying the generator, validator and rejection recorder
// ABOUTME: Also runs the nutrition path: objective interpretation followed by protein correction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Pipeline
//!
//! Each attempt generates a candidate and validates it. Rejections are
//! recorded before retrying. A retry caps the day one exercise below the
//! largest rejected day and moves to the next variation seed. The validator
//! only looks at muscle counts per day, so a retry whose muscle counts match
//! a rejected candidate is not attempted and the pipeline stops early.
//!
//! The last candidate is returned with its verdict so the caller can decide
//! what to show.

use crate::config::{EngineConfig, GeneratorConfig, NutritionPolicyConfig};
use crate::metrics::RejectionRecorder;
use crate::nutrition::corrector::validate_and_correct_nutrition_with_config;
use crate::nutrition::objective::interpret_objective_with_config;
use crate::nutrition::{NutritionCorrection, ObjectiveInterpretation};
use crate::training::generator::generate_training_plan_structure_with_config;
use crate::training::rules::{count_muscles, MuscleCounts};
use crate::training::validator::validate_training_plan_with_config;
use crate::training::{PlanRequest, PlanVerdict};
use fitplan_core::models::{DayType, NutritionPlan, TrainingPlan, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Result of a pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOutcome {
    /// Accepted plan, or the last rejected candidate
    pub plan: TrainingPlan,
    /// Verdict for `plan`
    pub verdict: PlanVerdict,
    /// Candidates validated
    pub attempts: u32,
}

impl PipelineOutcome {
    /// Whether the returned plan passed validation
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_usable()
    }
}

/// Nutrition plan after objective interpretation and protein correction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionOutcome {
    /// Objective the plan should follow
    pub objective: ObjectiveInterpretation,
    /// Corrected plan
    pub correction: NutritionCorrection,
}

/// Generate-validate-retry loop
#[derive(Clone)]
pub struct PlanPipeline {
    recorder: RejectionRecorder,
    generator: GeneratorConfig,
    nutrition: NutritionPolicyConfig,
    max_attempts: u32,
}

impl PlanPipeline {
    /// Pipeline using the settings in `config`
    #[must_use]
    pub fn new(recorder: RejectionRecorder, config: &EngineConfig) -> Self {
        Self {
            recorder,
            generator: config.generator.clone(),
            nutrition: config.nutrition.clone(),
            max_attempts: config.pipeline.max_attempts.max(1),
        }
    }

    /// Recorder receiving the rejections
    #[must_use]
    pub const fn recorder(&self) -> &RejectionRecorder {
        &self.recorder
    }

    /// Generate until a plan passes validation, the attempt budget runs out,
    /// or a retry would repeat a rejected structure
    #[must_use]
    pub fn generate(&self, request: &PlanRequest) -> PipelineOutcome {
        let level = request.level();
        let mut candidate = request.clone();
        let mut plan = generate_training_plan_structure_with_config(&candidate, &self.generator);
        let mut rejected_shapes = Vec::new();
        let mut attempt = 1;

        loop {
            let verdict = validate_training_plan_with_config(
                &plan,
                request.training_days_per_week,
                level,
                request.available_minutes_per_session,
                &self.generator,
            );

            if verdict.is_usable() {
                info!(attempt, variation = candidate.variation, "Training plan accepted");
                return PipelineOutcome {
                    plan,
                    verdict,
                    attempts: attempt,
                };
            }

            self.recorder.record_verdict(&verdict);
            rejected_shapes.push(plan_shape(&plan));
            if attempt >= self.max_attempts {
                warn!(
                    attempts = attempt,
                    reasons = ?verdict.reasons(),
                    "Attempt budget exhausted without a usable training plan"
                );
                return PipelineOutcome {
                    plan,
                    verdict,
                    attempts: attempt,
                };
            }

            candidate = retry_request(&candidate, &plan);
            let retry = generate_training_plan_structure_with_config(&candidate, &self.generator);
            if rejected_shapes.contains(&plan_shape(&retry)) {
                warn!(
                    attempts = attempt,
                    reasons = ?verdict.reasons(),
                    "Retry would repeat a rejected plan structure, stopping"
                );
                return PipelineOutcome {
                    plan,
                    verdict,
                    attempts: attempt,
                };
            }
            plan = retry;
            attempt += 1;
        }
    }

    /// Interpret the objective, then cap the protein target
    #[must_use]
    pub fn prepare_nutrition(
        &self,
        plan: NutritionPlan,
        profile: &UserProfile,
    ) -> NutritionOutcome {
        let objective = interpret_objective_with_config(profile, &self.nutrition);
        let correction = validate_and_correct_nutrition_with_config(plan, profile, &self.nutrition);
        NutritionOutcome {
            objective,
            correction,
        }
    }
}

/// Muscle counts per day, the only input the validator judges a day on
type PlanShape = Vec<(DayType, usize, MuscleCounts)>;

fn plan_shape(plan: &TrainingPlan) -> PlanShape {
    plan.weekly_schedule
        .iter()
        .map(|day| (day.day_type, day.exercises.len(), count_muscles(day)))
        .collect()
}

/// Next candidate request after `rejected` was generated from `request`
fn retry_request(request: &PlanRequest, rejected: &TrainingPlan) -> PlanRequest {
    let largest_day = rejected
        .weekly_schedule
        .iter()
        .map(|day| day.exercises.len())
        .max()
        .unwrap_or(0);
    PlanRequest {
        variation: request.variation.wrapping_add(1),
        max_exercises_per_session: Some(largest_day.saturating_sub(1)),
        ..request.clone()
    }
}
