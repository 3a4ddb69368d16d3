// ABOUTME: Enumerated rejection reasons and their context for failed candidate plans
// ABOUTME: Records are created at validation time and never mutated afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::MuscleGroup;
use super::plan::DayType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a candidate plan was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RejectionReason {
    /// Schedule length differs from the requested days per week
    #[serde(rename = "dias_incompativeis")]
    ScheduleLengthMismatch,
    /// Day outside the absolute 3-12 exercise bound
    #[serde(rename = "fora_limite_absoluto")]
    OutsideAbsoluteBounds,
    /// Day above the level's session cap
    #[serde(rename = "excesso_exercicios_nivel")]
    ExceedsLevelCap,
    /// One large muscle dominates a multi-muscle day
    #[serde(rename = "concentracao_grupo_grande")]
    LargeMuscleConcentration,
    /// A mandatory muscle group is absent
    #[serde(rename = "grupo_obrigatorio_ausente")]
    MissingRequiredGroup,
    /// An accessory muscle exceeds its share on a non-focus day
    #[serde(rename = "concentracao_grupo_pequeno")]
    SmallMuscleConcentration,
    /// The day cannot fit in the available session minutes
    #[serde(rename = "tempo_insuficiente")]
    InsufficientTime,
}

impl RejectionReason {
    /// Stable tag used as the aggregation key
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::ScheduleLengthMismatch => "dias_incompativeis",
            Self::OutsideAbsoluteBounds => "fora_limite_absoluto",
            Self::ExceedsLevelCap => "excesso_exercicios_nivel",
            Self::LargeMuscleConcentration => "concentracao_grupo_grande",
            Self::MissingRequiredGroup => "grupo_obrigatorio_ausente",
            Self::SmallMuscleConcentration => "concentracao_grupo_pequeno",
            Self::InsufficientTime => "tempo_insuficiente",
        }
    }

    /// Parse a stored tag
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        [
            Self::ScheduleLengthMismatch,
            Self::OutsideAbsoluteBounds,
            Self::ExceedsLevelCap,
            Self::LargeMuscleConcentration,
            Self::MissingRequiredGroup,
            Self::SmallMuscleConcentration,
            Self::InsufficientTime,
        ]
        .into_iter()
        .find(|reason| reason.tag() == tag)
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Context recorded with a rejection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionContext {
    /// Activity level label of the request
    pub activity_level: String,
    /// Exercise count of the offending day (or schedule length for plan-level reasons)
    pub exercise_count: usize,
    /// Day type of the offending day; `None` for plan-level reasons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_type: Option<DayType>,
    /// Day label of the offending day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    /// Muscle involved in a distribution or coverage failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle: Option<MuscleGroup>,
    /// Observed value (share, count or minutes) that broke the rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed: Option<f64>,
    /// Limit the observed value was compared against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
}

impl RejectionContext {
    /// Context for a plan-level failure
    pub fn for_plan(activity_level: impl Into<String>, exercise_count: usize) -> Self {
        Self {
            activity_level: activity_level.into(),
            exercise_count,
            day_type: None,
            day: None,
            muscle: None,
            observed: None,
            limit: None,
        }
    }

    /// Context for a failure on one day
    pub fn for_day(
        activity_level: impl Into<String>,
        day: impl Into<String>,
        day_type: DayType,
        exercise_count: usize,
    ) -> Self {
        Self {
            day_type: Some(day_type),
            day: Some(day.into()),
            ..Self::for_plan(activity_level, exercise_count)
        }
    }

    /// Attach the muscle involved
    #[must_use]
    pub fn with_muscle(mut self, muscle: MuscleGroup) -> Self {
        self.muscle = Some(muscle);
        self
    }

    /// Attach the observed value and its limit
    #[must_use]
    pub fn with_measure(mut self, observed: f64, limit: f64) -> Self {
        self.observed = Some(observed);
        self.limit = Some(limit);
        self
    }

    /// Aggregation key for the day-type dimension
    #[must_use]
    pub fn day_type_key(&self) -> &'static str {
        self.day_type.map_or("plan", DayType::label)
    }
}
