// ABOUTME: Engine-wide constants for exercise counts, nutrition caps and cardio limits
// ABOUTME: Default values consumed by configuration and by the pure policy functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants organized by domain. Configurable values in the engine crate use
//! these as their defaults.

/// Exercise-count bounds that apply to every training day
pub mod exercise_count {
    /// Fewest exercises a training day may contain
    pub const MIN_EXERCISES_PER_DAY: usize = 3;

    /// Most exercises a training day may contain, regardless of level
    pub const MAX_EXERCISES_PER_DAY: usize = 12;

    /// Per-level session caps, ordered from the most conservative level upward
    pub const IDOSO_MAX: usize = 5;
    /// Beginner cap
    pub const INICIANTE_MAX: usize = 6;
    /// Intermediate cap
    pub const MODERADO_MAX: usize = 8;
    /// Athlete cap
    pub const ATLETA_MAX: usize = 10;
    /// High-performance athlete cap
    pub const ATLETA_ALTO_RENDIMENTO_MAX: usize = 12;
}

/// Muscle-distribution thresholds, expressed as a share of the day's exercises
pub mod distribution {
    /// Largest share a single lower-body muscle may take on a leg day
    pub const LOWER_BODY_MAX_SHARE: f64 = 0.50;

    /// Largest share a single upper-body muscle may take on a mixed upper day
    pub const UPPER_BODY_MAX_SHARE: f64 = 0.60;

    /// Largest share an accessory muscle may take when it is not the day's focus
    pub const ACCESSORY_MAX_SHARE: f64 = 0.30;

    /// Absorbs float noise when comparing a share against its threshold
    pub const SHARE_EPSILON: f64 = 1e-9;
}

/// Session timing used to size a day from the available minutes
pub mod session {
    /// Session length assumed when the caller does not provide one
    pub const DEFAULT_SESSION_MINUTES: u32 = 60;

    /// Warm-up allowance subtracted before sizing the exercise list
    pub const WARM_UP_MINUTES: u32 = 10;

    /// Planned duration of one exercise (all sets plus rest)
    pub const MINUTES_PER_EXERCISE: u32 = 8;

    /// Shortest duration of one exercise a validator will accept
    pub const MIN_MINUTES_PER_EXERCISE: u32 = 4;
}

/// Nutrition correction coefficients
pub mod nutrition {
    /// Protein ceiling per kilogram of lean body mass
    pub const PROTEIN_CEILING_G_PER_KG_LEAN_MASS: f64 = 2.2;

    /// IMC at which the absolute protein cap replaces the lean-mass formula
    pub const OBESITY_IMC_THRESHOLD: f64 = 30.0;

    /// Absolute protein cap for women in the obesity range
    pub const OBESE_FEMALE_PROTEIN_CAP_G: u32 = 180;

    /// Absolute protein cap for men in the obesity range
    pub const OBESE_MALE_PROTEIN_CAP_G: u32 = 220;

    /// Absolute protein cap when gender is not stated
    pub const OBESE_OTHER_PROTEIN_CAP_G: u32 = 180;

    /// Estimated body-fat percentages are clamped to this range
    pub const MIN_BODY_FAT_PERCENT: f64 = 3.0;
    /// Upper clamp for estimated body fat
    pub const MAX_BODY_FAT_PERCENT: f64 = 60.0;

    /// Body fat at which a male mass-gain goal becomes recomposition
    pub const HIGH_ADIPOSITY_MALE_BF_PERCENT: f64 = 25.0;
    /// Body fat at which a female mass-gain goal becomes recomposition
    pub const HIGH_ADIPOSITY_FEMALE_BF_PERCENT: f64 = 32.0;
    /// Body fat at which a mass-gain goal becomes recomposition when gender is not stated
    pub const HIGH_ADIPOSITY_OTHER_BF_PERCENT: f64 = 28.0;

    /// Label assigned to a converted mass-gain objective
    pub const RECOMPOSITION_OBJECTIVE: &str = "Recomposição Corporal";
}

/// Cardio progression limits
pub mod cardio {
    /// IMC from which a profile is treated as at-risk
    pub const AT_RISK_IMC: f64 = 35.0;

    /// Initial cardio sessions per week for sedentary at-risk profiles
    pub const AT_RISK_MAX_FREQUENCY: u8 = 2;

    /// Ceiling on cardio plus strength sessions per week for at-risk profiles
    pub const COMBINED_STIMULUS_CEILING: u8 = 6;

    /// Cardio frequency assumed when the profile does not request one
    pub const DEFAULT_FREQUENCY: u8 = 3;

    /// Intensity forced on sedentary at-risk profiles
    pub const LIGHT_INTENSITY: &str = "leve";

    /// Intensity assumed when the profile does not request one
    pub const DEFAULT_INTENSITY: &str = "moderada";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Engine service name
    pub const FITPLAN_ENGINE: &str = "fitplan-engine";
}
