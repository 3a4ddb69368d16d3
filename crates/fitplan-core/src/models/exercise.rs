// ABOUTME: Exercise reference data model with muscle, movement pattern, role and environment tags
// ABOUTME: Also defines prescribed exercise instances and the joints each pattern loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize_label;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Primary muscle group trained by an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MuscleGroup {
    /// Chest
    #[serde(rename = "Peito")]
    Chest,
    /// Back (lats, rhomboids, traps)
    #[serde(rename = "Costas")]
    Back,
    /// Shoulders
    #[serde(rename = "Ombros")]
    Shoulders,
    /// Biceps
    #[serde(rename = "Biceps")]
    Biceps,
    /// Triceps
    #[serde(rename = "Triceps")]
    Triceps,
    /// Quadriceps
    #[serde(rename = "Quadriceps")]
    Quadriceps,
    /// Posterior chain (hamstrings, hip hinge)
    #[serde(rename = "Posterior")]
    Posterior,
    /// Glutes
    #[serde(rename = "Gluteos")]
    Glutes,
    /// Calves
    #[serde(rename = "Panturrilha")]
    Calves,
    /// Abdominals and core
    #[serde(rename = "Abdomen")]
    Abs,
}

impl MuscleGroup {
    /// Every muscle group, in catalog order
    pub const ALL: [Self; 10] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Quadriceps,
        Self::Posterior,
        Self::Glutes,
        Self::Calves,
        Self::Abs,
    ];

    /// Display label used in plans and logs
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chest => "Peito",
            Self::Back => "Costas",
            Self::Shoulders => "Ombros",
            Self::Biceps => "Biceps",
            Self::Triceps => "Triceps",
            Self::Quadriceps => "Quadriceps",
            Self::Posterior => "Posterior",
            Self::Glutes => "Gluteos",
            Self::Calves => "Panturrilha",
            Self::Abs => "Abdomen",
        }
    }

    /// Large muscles open a session; small ones form the accessory block
    #[must_use]
    pub const fn is_large(self) -> bool {
        matches!(
            self,
            Self::Chest
                | Self::Back
                | Self::Shoulders
                | Self::Quadriceps
                | Self::Posterior
                | Self::Glutes
        )
    }

    /// Parse a Portuguese or English muscle label
    #[must_use]
    pub fn parse_label(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "peito" | "peitoral" | "chest" => Some(Self::Chest),
            "costas" | "dorsal" | "back" => Some(Self::Back),
            "ombros" | "ombro" | "deltoides" | "shoulders" => Some(Self::Shoulders),
            "biceps" => Some(Self::Biceps),
            "triceps" => Some(Self::Triceps),
            "quadriceps" | "quads" => Some(Self::Quadriceps),
            "posterior" | "posteriordecoxa" | "isquiotibiais" | "hamstrings" => {
                Some(Self::Posterior)
            }
            "gluteos" | "gluteo" | "glutes" => Some(Self::Glutes),
            "panturrilha" | "panturrilhas" | "calves" => Some(Self::Calves),
            "abdomen" | "abdominal" | "core" | "abs" => Some(Self::Abs),
            _ => None,
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Movement pattern of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    /// Pressing away from the chest
    HorizontalPush,
    /// Pressing overhead
    VerticalPush,
    /// Rowing toward the torso
    HorizontalPull,
    /// Pulling down from overhead
    VerticalPull,
    /// Hip hinge
    HipDominant,
    /// Squat and lunge family
    KneeDominant,
    /// Anything else (curls, raises, core work)
    Other,
}

/// Structural (multi-joint) or isolated (single-joint) exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseRole {
    /// Compound movement
    Structural,
    /// Accessory movement
    Isolated,
}

/// Where an exercise can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Home setup only (household items, light dumbbells)
    Home,
    /// Gym-only equipment (machines, cables, racks)
    Gym,
    /// Anywhere (bodyweight, portable equipment)
    Both,
    /// Outdoor-only (hills, stairs, park structures)
    Outdoor,
}

bitflags! {
    /// Joints a movement loads heavily
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct JointStress: u8 {
        /// Loaded shoulder flexion/abduction
        const SHOULDER = 0b0000_0001;
        /// Loaded knee flexion
        const KNEE = 0b0000_0010;
    }
}

impl MovementPattern {
    /// Joints loaded by this pattern at the given role
    ///
    /// Overhead pressing loads the shoulder at any role; squat-family
    /// movements load the knee when performed as compound lifts.
    #[must_use]
    pub const fn joint_stress(self, role: ExerciseRole) -> JointStress {
        match (self, role) {
            (Self::VerticalPush, _) => JointStress::SHOULDER,
            (Self::KneeDominant, ExerciseRole::Structural) => JointStress::KNEE,
            _ => JointStress::empty(),
        }
    }
}

/// Immutable exercise reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Display name
    pub name: Cow<'static, str>,
    /// Muscle the exercise is counted against
    pub primary_muscle: MuscleGroup,
    /// Movement pattern
    pub pattern: MovementPattern,
    /// Structural or isolated
    pub role: ExerciseRole,
    /// Environment compatibility
    pub environment: Environment,
}

impl Exercise {
    /// Build a catalog entry from static data
    #[must_use]
    pub const fn new(
        name: &'static str,
        primary_muscle: MuscleGroup,
        pattern: MovementPattern,
        role: ExerciseRole,
        environment: Environment,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            primary_muscle,
            pattern,
            role,
            environment,
        }
    }

    /// Joints this exercise loads heavily
    #[must_use]
    pub const fn joint_stress(&self) -> JointStress {
        self.pattern.joint_stress(self.role)
    }
}

/// An exercise selected for a training day, with its prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseInstance {
    /// Selected exercise
    #[serde(flatten)]
    pub exercise: Exercise,
    /// Working sets
    pub sets: u8,
    /// Repetition range, e.g. "8-12"
    pub reps: String,
    /// Rest between sets, e.g. "90s"
    pub rest: String,
    /// Optional coaching notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExerciseInstance {
    /// Muscle this instance counts against
    #[must_use]
    pub const fn primary_muscle(&self) -> MuscleGroup {
        self.exercise.primary_muscle
    }
}
