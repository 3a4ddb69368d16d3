// ABOUTME: Pure validator for completed weekly training plans
// ABOUTME: Checks schedule length, count bounds, level caps, distribution, coverage and session time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Validator
//!
//! A plan is usable only when every rule holds on every training day. The
//! validator never mutates its input and has no side effects, so identical
//! inputs always give identical verdicts. Rest days are skipped.

use super::profile::TechnicalProfile;
use super::rules::{concentration_violations, count_muscles, missing_required};
use crate::config::{EngineConfig, GeneratorConfig};
use fitplan_core::constants::exercise_count::{MAX_EXERCISES_PER_DAY, MIN_EXERCISES_PER_DAY};
use fitplan_core::models::{
    ActivityLevel, DayType, RejectionContext, RejectionReason, TrainingDay, TrainingPlan,
};
use serde::{Deserialize, Serialize};

/// One broken rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRejection {
    /// Rule that failed
    pub reason: RejectionReason,
    /// Where and by how much
    pub context: RejectionContext,
}

/// Outcome of validating a plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanVerdict {
    /// Every broken rule, in day order
    pub rejections: Vec<PlanRejection>,
}

impl PlanVerdict {
    /// Whether no rule failed
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.rejections.is_empty()
    }

    /// Distinct reasons, in first-seen order
    #[must_use]
    pub fn reasons(&self) -> Vec<RejectionReason> {
        let mut reasons = Vec::new();
        for rejection in &self.rejections {
            if !reasons.contains(&rejection.reason) {
                reasons.push(rejection.reason);
            }
        }
        reasons
    }
}

/// Whether `plan` is usable, using the global configuration
#[must_use]
pub fn is_training_plan_usable(
    plan: &TrainingPlan,
    training_days_per_week: usize,
    activity_level: ActivityLevel,
    available_minutes_per_session: Option<u32>,
) -> bool {
    validate_training_plan(
        plan,
        training_days_per_week,
        activity_level,
        available_minutes_per_session,
    )
    .is_usable()
}

/// Validate `plan` and list every broken rule, using the global configuration
#[must_use]
pub fn validate_training_plan(
    plan: &TrainingPlan,
    training_days_per_week: usize,
    activity_level: ActivityLevel,
    available_minutes_per_session: Option<u32>,
) -> PlanVerdict {
    validate_training_plan_with_config(
        plan,
        training_days_per_week,
        activity_level,
        available_minutes_per_session,
        &EngineConfig::global().generator,
    )
}

/// Validate `plan` and list every broken rule
#[must_use]
pub fn validate_training_plan_with_config(
    plan: &TrainingPlan,
    training_days_per_week: usize,
    activity_level: ActivityLevel,
    available_minutes_per_session: Option<u32>,
    config: &GeneratorConfig,
) -> PlanVerdict {
    let profile = TechnicalProfile::from(activity_level);
    let mut rejections = Vec::new();

    if plan.weekly_schedule.len() != training_days_per_week {
        let context = RejectionContext::for_plan(activity_level.label(), plan.total_exercises())
            .with_measure(
                plan.weekly_schedule.len() as f64,
                training_days_per_week as f64,
            );
        rejections.push(PlanRejection {
            reason: RejectionReason::ScheduleLengthMismatch,
            context,
        });
    }

    for day in plan
        .weekly_schedule
        .iter()
        .filter(|d| d.day_type != DayType::Rest)
    {
        validate_day(
            day,
            &profile,
            available_minutes_per_session,
            config,
            &mut rejections,
        );
    }

    PlanVerdict { rejections }
}

fn validate_day(
    day: &TrainingDay,
    profile: &TechnicalProfile,
    available_minutes: Option<u32>,
    config: &GeneratorConfig,
    rejections: &mut Vec<PlanRejection>,
) {
    let count = day.exercises.len();
    let context =
        || RejectionContext::for_day(profile.level.label(), &day.day, day.day_type, count);
    let mut reject = |reason, ctx| rejections.push(PlanRejection { reason, context: ctx });

    if !(MIN_EXERCISES_PER_DAY..=MAX_EXERCISES_PER_DAY).contains(&count) {
        reject(
            RejectionReason::OutsideAbsoluteBounds,
            context().with_measure(count as f64, MAX_EXERCISES_PER_DAY as f64),
        );
    } else if count > profile.max_exercises_per_session {
        reject(
            RejectionReason::ExceedsLevelCap,
            context().with_measure(count as f64, profile.max_exercises_per_session as f64),
        );
    }

    let counts = count_muscles(day);
    for violation in concentration_violations(day.day_type, &counts, count) {
        reject(
            violation.rule.reason,
            context()
                .with_muscle(violation.muscle)
                .with_measure(violation.share, violation.rule.max_share),
        );
    }

    for muscle in missing_required(day.day_type, &counts) {
        reject(
            RejectionReason::MissingRequiredGroup,
            context().with_muscle(muscle),
        );
    }

    if let Some(minutes) = available_minutes {
        let needed = count as u64 * u64::from(config.min_minutes_per_exercise);
        if needed > u64::from(minutes) {
            reject(
                RejectionReason::InsufficientTime,
                context().with_measure(needed as f64, f64::from(minutes)),
            );
        }
    }
}
