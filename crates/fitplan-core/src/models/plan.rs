// ABOUTME: Weekly training plan model with day types, split types and generation gaps
// ABOUTME: Serialized in the camelCase shape the orchestrator stores and renders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::{ExerciseInstance, MuscleGroup};
use super::normalize_label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Muscle focus of a training day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayType {
    /// Whole body in one session
    #[serde(alias = "Full Body")]
    FullBody,
    /// Upper body (chest, back, shoulders, arms)
    Upper,
    /// Lower body (quadriceps, posterior chain, glutes, calves)
    Lower,
    /// Chest, shoulders and triceps
    Push,
    /// Back and biceps
    Pull,
    /// Legs (same muscles as a lower day)
    Legs,
    /// Shoulders and arms as the day's focus
    ShouldersArms,
    /// Rest or placeholder day
    Rest,
}

impl DayType {
    /// Display label used in plans and logs
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullBody => "FullBody",
            Self::Upper => "Upper",
            Self::Lower => "Lower",
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::Legs => "Legs",
            Self::ShouldersArms => "ShouldersArms",
            Self::Rest => "Rest",
        }
    }

    /// Parse a Portuguese or English day-type label
    #[must_use]
    pub fn parse_label(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "fullbody" | "corpointeiro" => Some(Self::FullBody),
            "upper" | "superiores" | "membrossuperiores" => Some(Self::Upper),
            "lower" | "inferiores" | "membrosinferiores" => Some(Self::Lower),
            "push" | "empurrar" => Some(Self::Push),
            "pull" | "puxar" => Some(Self::Pull),
            "legs" | "pernas" => Some(Self::Legs),
            "shouldersarms" | "ombrosebracos" | "ombrosbracos" | "arms" | "bracos" => {
                Some(Self::ShouldersArms)
            }
            "rest" | "descanso" => Some(Self::Rest),
            _ => None,
        }
    }

    /// Lower and Legs days share the same muscle template
    #[must_use]
    pub const fn is_lower_body(self) -> bool {
        matches!(self, Self::Lower | Self::Legs)
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weekly training structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitType {
    /// Every day trains the whole body
    #[serde(rename = "Full Body")]
    FullBody,
    /// Alternating upper and lower days
    #[serde(rename = "Upper/Lower")]
    UpperLower,
    /// Push, pull and legs rotation
    #[serde(rename = "Push/Pull/Legs")]
    PushPullLegs,
    /// Push, pull, legs and a shoulders/arms day
    #[serde(rename = "Push/Pull/Legs/ShouldersArms")]
    PushPullLegsArms,
}

impl SplitType {
    /// Parse a split label such as `"Upper/Lower"`, `"PPL"` or `"ABC"`
    #[must_use]
    pub fn parse_label(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "fullbody" | "corpointeiro" | "fb" => Some(Self::FullBody),
            "upperlower" | "ab" | "superiorinferior" => Some(Self::UpperLower),
            "pushpulllegs" | "ppl" | "abc" => Some(Self::PushPullLegs),
            "pushpulllegsshouldersarms" | "pushpulllegsarms" | "abcd" => {
                Some(Self::PushPullLegsArms)
            }
            _ => None,
        }
    }

    /// Split chosen when the caller does not name one
    #[must_use]
    pub const fn for_frequency(days_per_week: usize) -> Self {
        match days_per_week {
            0..=3 => Self::FullBody,
            4 => Self::UpperLower,
            _ => Self::PushPullLegs,
        }
    }

    /// Day rotation of the split
    #[must_use]
    pub const fn rotation(self) -> &'static [DayType] {
        match self {
            Self::FullBody => &[DayType::FullBody],
            Self::UpperLower => &[DayType::Upper, DayType::Lower],
            Self::PushPullLegs => &[DayType::Push, DayType::Pull, DayType::Legs],
            Self::PushPullLegsArms => &[
                DayType::Push,
                DayType::Pull,
                DayType::Legs,
                DayType::ShouldersArms,
            ],
        }
    }

    /// Day types for a week of `days_per_week` sessions
    #[must_use]
    pub fn schedule(self, days_per_week: usize) -> Vec<DayType> {
        self.rotation()
            .iter()
            .copied()
            .cycle()
            .take(days_per_week)
            .collect()
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullBody => "Full Body",
            Self::UpperLower => "Upper/Lower",
            Self::PushPullLegs => "Push/Pull/Legs",
            Self::PushPullLegsArms => "Push/Pull/Legs/ShouldersArms",
        }
    }
}

/// One day of the weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDay {
    /// Day label, e.g. "Dia 1"
    pub day: String,
    /// Muscle focus of the day
    #[serde(rename = "type")]
    pub day_type: DayType,
    /// Ordered exercise list
    pub exercises: Vec<ExerciseInstance>,
}

impl TrainingDay {
    /// Number of exercises assigned to `muscle`
    #[must_use]
    pub fn count_for(&self, muscle: MuscleGroup) -> usize {
        self.exercises
            .iter()
            .filter(|e| e.primary_muscle() == muscle)
            .count()
    }

    /// Number of transitions between contiguous muscle blocks
    ///
    /// A day ordered `Chest, Chest, Shoulders, Triceps` has two transitions.
    #[must_use]
    pub fn muscle_transitions(&self) -> usize {
        self.exercises
            .windows(2)
            .filter(|pair| pair[0].primary_muscle() != pair[1].primary_muscle())
            .count()
    }
    /// Number of switches between the large-muscle and accessory groups
    ///
    /// A day ordered as one large-muscle block followed by one accessory
    /// block has a single transition, however many muscles each block holds.
    /// `Chest, Triceps, Shoulders` has two.
    #[must_use]
    pub fn block_transitions(&self) -> usize {
        self.exercises
            .windows(2)
            .filter(|pair| {
                pair[0].primary_muscle().is_large() != pair[1].primary_muscle().is_large()
            })
            .count()
    }
}

/// A muscle group the catalog could not fill for a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationGap {
    /// Day label
    pub day: String,
    /// Muscle that came up short
    pub muscle: MuscleGroup,
    /// Exercises the day template asked for
    pub requested: usize,
    /// Exercises actually available after filtering
    pub filled: usize,
}

/// Complete weekly training plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    /// Plan summary
    pub overview: String,
    /// Progression guidance
    pub progression: String,
    /// One entry per training day
    pub weekly_schedule: Vec<TrainingDay>,
    /// Groups the generator could not fill; empty for a complete plan
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gaps: Vec<GenerationGap>,
}

impl TrainingPlan {
    /// Total exercises across the week
    #[must_use]
    pub fn total_exercises(&self) -> usize {
        self.weekly_schedule.iter().map(|d| d.exercises.len()).sum()
    }

    /// Every exercise name in schedule order
    pub fn exercise_names(&self) -> impl Iterator<Item = &str> {
        self.weekly_schedule
            .iter()
            .flat_map(|d| d.exercises.iter())
            .map(|e| e.exercise.name.as_ref())
    }
}
