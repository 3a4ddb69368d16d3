// ABOUTME: Weekly training plan generator driven by the catalog, split type and level profile
// ABOUTME: Allocates exercises per muscle under the distribution rules and groups them by muscle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Generator
//!
//! Builds a deterministic weekly schedule:
//!
//! 1. Filter the catalog by location and joint restrictions
//! 2. Size each day from the level cap and the available minutes
//! 3. Allocate exercises per muscle round-robin over the day template,
//!    refusing any step that would break a distribution rule. When the size
//!    cannot be filled, the nearest size that can is used instead
//! 4. Order the day as a large-muscle block followed by an accessory block,
//!    compound movements first inside each muscle
//!
//! Muscles with no eligible exercise are reported as [`GenerationGap`]s
//! instead of being filled with invented entries.

use super::profile::{resolve_activity_level, TechnicalProfile};
use super::rules::{concentration_violations, day_template, required_muscles, MuscleCounts};
use crate::catalog::CatalogFilter;
use crate::config::{EngineConfig, GeneratorConfig};
use fitplan_core::constants::exercise_count::{MAX_EXERCISES_PER_DAY, MIN_EXERCISES_PER_DAY};
use fitplan_core::constants::nutrition::OBESITY_IMC_THRESHOLD;
use fitplan_core::models::{
    ActivityLevel, DayType, Exercise, ExerciseInstance, ExerciseRole, GenerationGap, JointStress,
    MovementPattern, MuscleGroup, SplitType, TrainingDay, TrainingLocation, TrainingPlan,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Inputs for one plan generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Training days per week; the schedule has exactly this many entries
    pub training_days_per_week: usize,
    /// Activity level label, e.g. "Moderado"
    pub activity_level: String,
    /// Split label; chosen from the frequency when absent or unknown
    #[serde(default)]
    pub split_type: Option<String>,
    /// Session length in minutes
    #[serde(default)]
    pub available_minutes_per_session: Option<u32>,
    /// Body mass index
    #[serde(default)]
    pub imc: Option<f64>,
    /// Stated objective, echoed in the overview
    #[serde(default)]
    pub objective: Option<String>,
    /// Exclude movements that load the shoulder
    #[serde(default)]
    pub has_shoulder_restriction: bool,
    /// Exclude movements that load the knee
    #[serde(default)]
    pub has_knee_restriction: bool,
    /// Location label ("casa", "academia", "ar_livre"); gym when absent
    #[serde(default)]
    pub training_location: Option<String>,
    /// Rotation seed for exercise choice inside each muscle pool
    #[serde(default)]
    pub variation: u32,
    /// Upper bound on exercises per day, below the level cap
    #[serde(default)]
    pub max_exercises_per_session: Option<usize>,
}

impl PlanRequest {
    /// Request with only the mandatory fields set
    pub fn new(training_days_per_week: usize, activity_level: impl Into<String>) -> Self {
        Self {
            training_days_per_week,
            activity_level: activity_level.into(),
            split_type: None,
            available_minutes_per_session: None,
            imc: None,
            objective: None,
            has_shoulder_restriction: false,
            has_knee_restriction: false,
            training_location: None,
            variation: 0,
            max_exercises_per_session: None,
        }
    }

    /// Resolved activity level
    #[must_use]
    pub fn level(&self) -> ActivityLevel {
        resolve_activity_level(&self.activity_level)
    }

    /// Requested split, or the one implied by the frequency
    #[must_use]
    pub fn split(&self) -> SplitType {
        self.split_type
            .as_deref()
            .and_then(SplitType::parse_label)
            .unwrap_or_else(|| SplitType::for_frequency(self.training_days_per_week))
    }

    /// Parsed location; `None` behaves like a gym
    #[must_use]
    pub fn location(&self) -> Option<TrainingLocation> {
        self.training_location
            .as_deref()
            .and_then(TrainingLocation::parse_label)
    }

    /// Joints excluded by the injury flags
    #[must_use]
    pub fn restrictions(&self) -> JointStress {
        let mut restrictions = JointStress::empty();
        if self.has_shoulder_restriction {
            restrictions |= JointStress::SHOULDER;
        }
        if self.has_knee_restriction {
            restrictions |= JointStress::KNEE;
        }
        restrictions
    }
}

/// Generate a weekly plan using the global configuration
#[must_use]
pub fn generate_training_plan_structure(request: &PlanRequest) -> TrainingPlan {
    generate_training_plan_structure_with_config(request, &EngineConfig::global().generator)
}

/// Generate a weekly plan
#[must_use]
pub fn generate_training_plan_structure_with_config(
    request: &PlanRequest,
    config: &GeneratorConfig,
) -> TrainingPlan {
    let profile = TechnicalProfile::from(request.level());
    let split = request.split();
    let filter = CatalogFilter::new(request.location(), request.restrictions());
    let limit = request
        .max_exercises_per_session
        .unwrap_or(MAX_EXERCISES_PER_DAY)
        .max(MIN_EXERCISES_PER_DAY);
    let session_size =
        session_size(&profile, request.available_minutes_per_session, config).min(limit);
    let size_ceiling =
        size_ceiling(&profile, request.available_minutes_per_session, config).min(limit);
    let high_imc = request.imc.is_some_and(|imc| imc >= OBESITY_IMC_THRESHOLD);

    let mut weekly_schedule = Vec::with_capacity(request.training_days_per_week);
    let mut gaps = Vec::new();

    for (index, day_type) in split
        .schedule(request.training_days_per_week)
        .into_iter()
        .enumerate()
    {
        let label = format!("Dia {}", index + 1);
        let offset = index + request.variation as usize;
        let day = build_day(
            &label,
            day_type,
            &DayContext {
                filter: &filter,
                profile: &profile,
                session_size,
                size_ceiling,
                offset,
                high_imc,
            },
            &mut gaps,
        );
        debug!(
            day = %day.day,
            day_type = %day.day_type,
            exercises = day.exercises.len(),
            transitions = day.muscle_transitions(),
            "Built training day"
        );
        weekly_schedule.push(day);
    }

    let plan = TrainingPlan {
        overview: overview(request, split, &profile, session_size),
        progression: profile.progression.to_owned(),
        weekly_schedule,
        gaps,
    };

    info!(
        split = split.label(),
        level = %profile.level,
        days = plan.weekly_schedule.len(),
        total_exercises = plan.total_exercises(),
        gaps = plan.gaps.len(),
        variation = request.variation,
        "Generated training plan"
    );
    plan
}

/// Exercises per day from the level cap and available minutes
#[must_use]
pub fn session_size(
    profile: &TechnicalProfile,
    available_minutes: Option<u32>,
    config: &GeneratorConfig,
) -> usize {
    let minutes = available_minutes.unwrap_or(config.default_session_minutes);
    let by_time =
        minutes.saturating_sub(config.warm_up_minutes) / config.minutes_per_exercise.max(1);
    (by_time as usize)
        .min(profile.effective_max())
        .clamp(MIN_EXERCISES_PER_DAY, MAX_EXERCISES_PER_DAY)
}

/// Largest day size the validator accepts for the level and the minutes
///
/// Bounded by the minimum minutes per exercise rather than the planning
/// duration, so a day may grow past [`session_size`] when that is the only
/// way to satisfy the distribution rules.
fn size_ceiling(
    profile: &TechnicalProfile,
    available_minutes: Option<u32>,
    config: &GeneratorConfig,
) -> usize {
    let minutes = available_minutes.unwrap_or(config.default_session_minutes);
    let by_time = minutes / config.min_minutes_per_exercise.max(1);
    (by_time as usize)
        .min(profile.effective_max())
        .min(MAX_EXERCISES_PER_DAY)
}

struct DayContext<'a> {
    filter: &'a CatalogFilter,
    profile: &'a TechnicalProfile,
    session_size: usize,
    size_ceiling: usize,
    offset: usize,
    high_imc: bool,
}

fn build_day(
    label: &str,
    day_type: DayType,
    ctx: &DayContext<'_>,
    gaps: &mut Vec<GenerationGap>,
) -> TrainingDay {
    let template = day_template(day_type);
    let pools: BTreeMap<MuscleGroup, Vec<&'static Exercise>> = template
        .iter()
        .map(|&muscle| (muscle, ctx.filter.pool(muscle)))
        .collect();

    for (&muscle, pool) in &pools {
        if pool.is_empty() {
            gaps.push(GenerationGap {
                day: label.to_owned(),
                muscle,
                requested: 1,
                filled: 0,
            });
        }
    }

    let counts = allocate_best(day_type, &pools, ctx.session_size, ctx.size_ceiling);

    let large = template.iter().filter(|m| m.is_large());
    let small = template.iter().filter(|m| !m.is_large());
    let mut exercises = Vec::with_capacity(ctx.session_size);
    for &muscle in large.chain(small) {
        let count = counts.get(&muscle).copied().unwrap_or(0);
        let pool = pools.get(&muscle).map_or(&[][..], Vec::as_slice);
        exercises.extend(
            pick_exercises(pool, count, ctx.offset)
                .into_iter()
                .map(|exercise| prescribe(exercise, ctx)),
        );
    }

    TrainingDay {
        day: label.to_owned(),
        day_type,
        exercises,
    }
}

/// Allocation for the size nearest `session_size` that fills within the rules
///
/// Smaller sizes are tried first, down to the absolute minimum, then larger
/// ones up to `ceiling`. Three exercises on a push or pull day always break a
/// share ceiling, so those days grow to four. When no size fills, the partial
/// allocation at `session_size` is returned for the validator to reject.
fn allocate_best(
    day_type: DayType,
    pools: &BTreeMap<MuscleGroup, Vec<&'static Exercise>>,
    session_size: usize,
    ceiling: usize,
) -> MuscleCounts {
    (MIN_EXERCISES_PER_DAY..=session_size)
        .rev()
        .chain(session_size + 1..=ceiling)
        .map(|target| (target, allocate(day_type, pools, target)))
        .find(|(target, counts)| counts.values().sum::<usize>() == *target)
        .map_or_else(
            || allocate(day_type, pools, session_size),
            |(_, counts)| counts,
        )
}

fn allocate(
    day_type: DayType,
    pools: &BTreeMap<MuscleGroup, Vec<&'static Exercise>>,
    target: usize,
) -> MuscleCounts {
    let template = day_template(day_type);
    let mut counts = MuscleCounts::new();
    let mut total = 0;

    for muscle in required_muscles(day_type) {
        if total < target && try_add(day_type, &mut counts, muscle, pools, target) {
            total += 1;
        }
    }

    while total < target {
        let mut progressed = false;
        for &muscle in template {
            if total == target {
                break;
            }
            if try_add(day_type, &mut counts, muscle, pools, target) {
                total += 1;
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }
    counts
}

/// Add one exercise for `muscle` when the pool has room and no rule breaks
fn try_add(
    day_type: DayType,
    counts: &mut MuscleCounts,
    muscle: MuscleGroup,
    pools: &BTreeMap<MuscleGroup, Vec<&'static Exercise>>,
    target: usize,
) -> bool {
    let available = pools.get(&muscle).map_or(0, Vec::len);
    let current = counts.get(&muscle).copied().unwrap_or(0);
    if current >= available {
        return false;
    }

    let mut next = counts.clone();
    next.insert(muscle, current + 1);
    if concentration_violations(day_type, &next, target).is_empty() {
        *counts = next;
        true
    } else {
        false
    }
}

/// `count` distinct exercises, compound movements first, rotated by `offset`
fn pick_exercises(
    pool: &[&'static Exercise],
    count: usize,
    offset: usize,
) -> Vec<&'static Exercise> {
    let (structural, isolated): (Vec<_>, Vec<_>) = pool
        .iter()
        .copied()
        .partition(|e| e.role == ExerciseRole::Structural);
    rotated(&structural, offset)
        .chain(rotated(&isolated, offset))
        .take(count)
        .collect()
}

fn rotated<'a>(
    items: &'a [&'static Exercise],
    offset: usize,
) -> impl Iterator<Item = &'static Exercise> + 'a {
    let start = if items.is_empty() { 0 } else { offset % items.len() };
    items[start..].iter().chain(&items[..start]).copied()
}

fn prescribe(exercise: &'static Exercise, ctx: &DayContext<'_>) -> ExerciseInstance {
    let scheme = ctx.profile.scheme_for(exercise.role);
    let notes = (ctx.high_imc
        && exercise.pattern == MovementPattern::KneeDominant
        && exercise.role == ExerciseRole::Structural)
        .then(|| "Amplitude controlada, sem saltos".to_owned());
    ExerciseInstance {
        exercise: exercise.clone(),
        sets: scheme.sets,
        reps: scheme.reps.to_owned(),
        rest: scheme.rest.to_owned(),
        notes,
    }
}

fn overview(
    request: &PlanRequest,
    split: SplitType,
    profile: &TechnicalProfile,
    session_size: usize,
) -> String {
    let location = match request.location() {
        Some(TrainingLocation::Home) => "em casa",
        Some(TrainingLocation::Outdoor) => "ao ar livre",
        Some(TrainingLocation::Gym) | None => "na academia",
    };
    let mut overview = format!(
        "Divisão {} com {} dias por semana {location}, nível {}, \
         até {session_size} exercícios por sessão.",
        split.label(),
        request.training_days_per_week,
        profile.level,
    );
    if let Some(objective) = request.objective.as_deref().filter(|o| !o.trim().is_empty()) {
        overview.push_str(&format!(" Objetivo: {}.", objective.trim()));
    }
    overview
}
