// ABOUTME: Technical training profile per activity level and the exercise-count policy
// ABOUTME: Single source for per-level session caps consumed by the generator and the validator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Profile Resolver
//!
//! Maps a coarse activity level to the technical parameters used to build and
//! check a session. Caps per level:
//!
//! | Level | Max exercises per session |
//! |---|---|
//! | Idoso | 5 |
//! | Iniciante | 6 |
//! | Moderado | 8 |
//! | Atleta | 10 |
//! | Atleta Alto Rendimento | 12 |
//!
//! Every day must also hold between 3 and 12 exercises regardless of level.
//! Unrecognised labels resolve to the most conservative profile (Idoso).

use fitplan_core::constants::exercise_count::{
    ATLETA_ALTO_RENDIMENTO_MAX, ATLETA_MAX, IDOSO_MAX, INICIANTE_MAX, MAX_EXERCISES_PER_DAY,
    MIN_EXERCISES_PER_DAY, MODERADO_MAX,
};
use fitplan_core::models::{ActivityLevel, ExerciseRole};
use serde::Serialize;
use tracing::debug;

/// Sets, reps and rest prescribed for one exercise role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetScheme {
    /// Working sets
    pub sets: u8,
    /// Repetition range
    pub reps: &'static str,
    /// Rest between sets
    pub rest: &'static str,
}

/// Technical parameters derived from an activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechnicalProfile {
    /// Level the profile was resolved for
    pub level: ActivityLevel,
    /// Most exercises allowed in one session
    pub max_exercises_per_session: usize,
    /// Prescription for compound movements
    pub structural: SetScheme,
    /// Prescription for accessory movements
    pub isolated: SetScheme,
    /// Weekly progression guidance
    pub progression: &'static str,
}

impl TechnicalProfile {
    /// Prescription for an exercise role
    #[must_use]
    pub const fn scheme_for(&self, role: ExerciseRole) -> SetScheme {
        match role {
            ExerciseRole::Structural => self.structural,
            ExerciseRole::Isolated => self.isolated,
        }
    }

    /// Session cap after the absolute bound
    #[must_use]
    pub const fn effective_max(&self) -> usize {
        if self.max_exercises_per_session < MAX_EXERCISES_PER_DAY {
            self.max_exercises_per_session
        } else {
            MAX_EXERCISES_PER_DAY
        }
    }

    /// Whether `count` exercises fit both the absolute bound and this level's cap
    #[must_use]
    pub const fn allows(&self, count: usize) -> bool {
        count >= MIN_EXERCISES_PER_DAY && count <= self.effective_max()
    }
}

impl From<ActivityLevel> for TechnicalProfile {
    fn from(level: ActivityLevel) -> Self {
        match level {
            ActivityLevel::Idoso => Self {
                level,
                max_exercises_per_session: IDOSO_MAX,
                structural: SetScheme {
                    sets: 2,
                    reps: "12-15",
                    rest: "90s",
                },
                isolated: SetScheme {
                    sets: 2,
                    reps: "12-15",
                    rest: "60s",
                },
                progression:
                    "Aumente repetições antes de carga; priorize controle e amplitude confortável.",
            },
            ActivityLevel::Iniciante => Self {
                level,
                max_exercises_per_session: INICIANTE_MAX,
                structural: SetScheme {
                    sets: 3,
                    reps: "10-12",
                    rest: "90s",
                },
                isolated: SetScheme {
                    sets: 2,
                    reps: "12-15",
                    rest: "60s",
                },
                progression:
                    "Aumente a carga em 2-5% quando completar todas as séries no topo da faixa.",
            },
            ActivityLevel::Moderado => Self {
                level,
                max_exercises_per_session: MODERADO_MAX,
                structural: SetScheme {
                    sets: 3,
                    reps: "8-12",
                    rest: "90s",
                },
                isolated: SetScheme {
                    sets: 3,
                    reps: "10-15",
                    rest: "60s",
                },
                progression:
                    "Progressão dupla: suba repetições até o topo da faixa, \
                     depois aumente a carga.",
            },
            ActivityLevel::Atleta => Self {
                level,
                max_exercises_per_session: ATLETA_MAX,
                structural: SetScheme {
                    sets: 4,
                    reps: "6-10",
                    rest: "120s",
                },
                isolated: SetScheme {
                    sets: 3,
                    reps: "10-12",
                    rest: "75s",
                },
                progression:
                    "Ondulação semanal de carga e volume com semana de deload a cada 4-6 semanas.",
            },
            ActivityLevel::AtletaAltoRendimento => Self {
                level,
                max_exercises_per_session: ATLETA_ALTO_RENDIMENTO_MAX,
                structural: SetScheme {
                    sets: 4,
                    reps: "5-8",
                    rest: "150s",
                },
                isolated: SetScheme {
                    sets: 3,
                    reps: "8-12",
                    rest: "90s",
                },
                progression:
                    "Periodização em blocos com controle de RPE \
                     e deload planejado a cada 4 semanas.",
            },
        }
    }
}

/// Activity level for a label, falling back to the most conservative level
#[must_use]
pub fn resolve_activity_level(label: &str) -> ActivityLevel {
    ActivityLevel::parse_label(label).unwrap_or_else(|| {
        debug!(
            label,
            fallback = %ActivityLevel::MOST_CONSERVATIVE,
            "Unrecognised activity level label, using most conservative profile"
        );
        ActivityLevel::MOST_CONSERVATIVE
    })
}

/// Technical profile for an activity level label
#[must_use]
pub fn resolve_technical_profile(label: &str) -> TechnicalProfile {
    TechnicalProfile::from(resolve_activity_level(label))
}

/// Whether `count` exercises are allowed for the level named by `level_label`
///
/// True iff `3 <= count <= min(12, cap(level))`.
#[must_use]
pub fn validate_exercises_count_by_level(count: usize, level_label: &str) -> bool {
    resolve_technical_profile(level_label).allows(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_follow_level_order() {
        let caps: Vec<usize> = ActivityLevel::ALL
            .into_iter()
            .map(|l| TechnicalProfile::from(l).max_exercises_per_session)
            .collect();
        assert_eq!(caps, vec![5, 6, 8, 10, 12]);
    }

    #[test]
    fn test_unknown_label_is_most_conservative() {
        let profile = resolve_technical_profile("Super Saiyajin");
        assert_eq!(profile.level, ActivityLevel::Idoso);
        assert_eq!(profile.max_exercises_per_session, 5);
    }

    #[test]
    fn test_scheme_for_role() {
        let profile = TechnicalProfile::from(ActivityLevel::Atleta);
        assert_eq!(profile.scheme_for(ExerciseRole::Structural).sets, 4);
        assert_eq!(profile.scheme_for(ExerciseRole::Isolated).rest, "75s");
    }
}
