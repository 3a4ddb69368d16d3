// ABOUTME: Declarative muscle-distribution and coverage rules shared by generator and validator
// ABOUTME: Each rule is a record of muscle set, day-type scope and share threshold evaluated generically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Distribution Rules
//!
//! Concentration rules cap the share of a day's exercises a single muscle may
//! take. A rule only fires on the day types it names, and only when that day
//! type's template spans at least `min_template_span` muscles of its set, so
//! an upper day made of chest alone is still concentrated. Ties at the
//! threshold are accepted.
//!
//! | Muscle set | Day types | Max share |
//! |---|---|---|
//! | quadriceps, posterior, glutes, calves | Lower, Legs | 50% |
//! | chest, back, shoulders | FullBody, Upper, Push, Pull | 60% |
//! | biceps, triceps, abs | every training day, except the day's focus | 30% |
//!
//! Adding a split means adding its day types to these tables, not new branches.

use fitplan_core::constants::distribution::{
    ACCESSORY_MAX_SHARE, LOWER_BODY_MAX_SHARE, SHARE_EPSILON, UPPER_BODY_MAX_SHARE,
};
use fitplan_core::models::{DayType, MuscleGroup, RejectionReason, TrainingDay};
use std::collections::BTreeMap;

/// Exercises per primary muscle for one day
pub type MuscleCounts = BTreeMap<MuscleGroup, usize>;

const LOWER_DAYS: &[DayType] = &[DayType::Lower, DayType::Legs];

const MIXED_UPPER_DAYS: &[DayType] = &[
    DayType::FullBody,
    DayType::Upper,
    DayType::Push,
    DayType::Pull,
];

const TRAINING_DAYS: &[DayType] = &[
    DayType::FullBody,
    DayType::Upper,
    DayType::Lower,
    DayType::Push,
    DayType::Pull,
    DayType::Legs,
    DayType::ShouldersArms,
];

/// Share ceiling for muscles of a set on the day types it covers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcentrationRule {
    /// Reason recorded when the rule fails
    pub reason: RejectionReason,
    /// Muscles the rule caps
    pub muscles: &'static [MuscleGroup],
    /// Day types the rule is evaluated on
    pub day_types: &'static [DayType],
    /// Largest accepted share of the day's exercises
    pub max_share: f64,
    /// Muscles of the set the day template must include for the rule to fire
    pub min_template_span: usize,
    /// Skip muscles that are the focus of the day
    pub exempt_focus: bool,
}

/// Ordered list of concentration rules
pub static CONCENTRATION_RULES: &[ConcentrationRule] = &[
    ConcentrationRule {
        reason: RejectionReason::LargeMuscleConcentration,
        muscles: &[
            MuscleGroup::Quadriceps,
            MuscleGroup::Posterior,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
        ],
        day_types: LOWER_DAYS,
        max_share: LOWER_BODY_MAX_SHARE,
        min_template_span: 2,
        exempt_focus: false,
    },
    ConcentrationRule {
        reason: RejectionReason::LargeMuscleConcentration,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Shoulders],
        day_types: MIXED_UPPER_DAYS,
        max_share: UPPER_BODY_MAX_SHARE,
        min_template_span: 2,
        exempt_focus: false,
    },
    ConcentrationRule {
        reason: RejectionReason::SmallMuscleConcentration,
        muscles: &[MuscleGroup::Biceps, MuscleGroup::Triceps, MuscleGroup::Abs],
        day_types: TRAINING_DAYS,
        max_share: ACCESSORY_MAX_SHARE,
        min_template_span: 0,
        exempt_focus: true,
    },
];

/// Muscles a day type must train at least once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageRule {
    /// Day types the rule is evaluated on
    pub day_types: &'static [DayType],
    /// Muscles that must each appear
    pub muscles: &'static [MuscleGroup],
}

/// Mandatory coverage per day type
pub static COVERAGE_RULES: &[CoverageRule] = &[CoverageRule {
    day_types: LOWER_DAYS,
    muscles: &[
        MuscleGroup::Quadriceps,
        MuscleGroup::Posterior,
        MuscleGroup::Glutes,
    ],
}];

/// A muscle whose share broke a concentration rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShareViolation {
    /// Rule that failed
    pub rule: &'static ConcentrationRule,
    /// Offending muscle
    pub muscle: MuscleGroup,
    /// Observed share of the day
    pub share: f64,
}

impl ConcentrationRule {
    /// Whether the rule is evaluated on `day_type`
    ///
    /// Depends on the day type alone, never on what a candidate day contains.
    #[must_use]
    pub fn applies_to(&self, day_type: DayType) -> bool {
        let span = day_template(day_type)
            .iter()
            .filter(|m| self.muscles.contains(m))
            .count();
        self.day_types.contains(&day_type) && span >= self.min_template_span
    }

    /// First muscle of the set whose share exceeds the ceiling
    ///
    /// `total` is the day size used as denominator.
    #[must_use]
    pub fn first_violation(
        &'static self,
        day_type: DayType,
        counts: &MuscleCounts,
        total: usize,
    ) -> Option<ShareViolation> {
        if total == 0 || !self.applies_to(day_type) {
            return None;
        }

        let focus = focus_muscles(day_type);
        self.muscles
            .iter()
            .filter(|m| !(self.exempt_focus && focus.contains(*m)))
            .find_map(|&muscle| {
                let share = counts.get(&muscle).copied().unwrap_or(0) as f64 / total as f64;
                (share > self.max_share + SHARE_EPSILON).then_some(ShareViolation {
                    rule: self,
                    muscle,
                    share,
                })
            })
    }
}

/// Muscles that are the primary focus of a day type
#[must_use]
pub const fn focus_muscles(day_type: DayType) -> &'static [MuscleGroup] {
    match day_type {
        DayType::ShouldersArms => &[
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
        ],
        _ => &[],
    }
}

/// Muscles trained on a day type, large muscles first in session order
#[must_use]
pub const fn day_template(day_type: DayType) -> &'static [MuscleGroup] {
    match day_type {
        DayType::FullBody => &[
            MuscleGroup::Quadriceps,
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Posterior,
            MuscleGroup::Shoulders,
            MuscleGroup::Glutes,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Calves,
            MuscleGroup::Abs,
        ],
        DayType::Upper => &[
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
        ],
        DayType::Lower | DayType::Legs => &[
            MuscleGroup::Quadriceps,
            MuscleGroup::Posterior,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
        ],
        DayType::Push => &[MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps],
        DayType::Pull => &[MuscleGroup::Back, MuscleGroup::Shoulders, MuscleGroup::Biceps],
        DayType::ShouldersArms => &[
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Abs,
        ],
        DayType::Rest => &[],
    }
}

/// Muscles a day type must include
#[must_use]
pub fn required_muscles(day_type: DayType) -> Vec<MuscleGroup> {
    COVERAGE_RULES
        .iter()
        .filter(|rule| rule.day_types.contains(&day_type))
        .flat_map(|rule| rule.muscles.iter().copied())
        .collect()
}

/// Exercises per primary muscle on `day`
#[must_use]
pub fn count_muscles(day: &TrainingDay) -> MuscleCounts {
    let mut counts = MuscleCounts::new();
    for exercise in &day.exercises {
        *counts.entry(exercise.primary_muscle()).or_insert(0) += 1;
    }
    counts
}

/// Every concentration rule broken by `counts` on a day of `total` exercises
#[must_use]
pub fn concentration_violations(
    day_type: DayType,
    counts: &MuscleCounts,
    total: usize,
) -> Vec<ShareViolation> {
    CONCENTRATION_RULES
        .iter()
        .filter_map(|rule| rule.first_violation(day_type, counts, total))
        .collect()
}

/// Required muscles absent from `counts`
#[must_use]
pub fn missing_required(day_type: DayType, counts: &MuscleCounts) -> Vec<MuscleGroup> {
    required_muscles(day_type)
        .into_iter()
        .filter(|m| counts.get(m).copied().unwrap_or(0) == 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(MuscleGroup, usize)]) -> MuscleCounts {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_lower_rule_accepts_tie() {
        let c = counts(&[(MuscleGroup::Quadriceps, 2), (MuscleGroup::Posterior, 2)]);
        assert!(concentration_violations(DayType::Legs, &c, 4).is_empty());
    }

    #[test]
    fn test_single_large_muscle_on_mixed_day_is_concentrated() {
        let c = counts(&[(MuscleGroup::Back, 3)]);
        let v = concentration_violations(DayType::Pull, &c, 3);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].muscle, MuscleGroup::Back);
        assert_eq!(v[0].rule.reason, RejectionReason::LargeMuscleConcentration);
    }

    #[test]
    fn test_rules_follow_day_type_not_contents() {
        let upper = &CONCENTRATION_RULES[1];
        assert!(upper.applies_to(DayType::Push));
        assert!(upper.applies_to(DayType::FullBody));
        assert!(!upper.applies_to(DayType::ShouldersArms));
        assert!(!upper.applies_to(DayType::Lower));
        assert!(CONCENTRATION_RULES[2].applies_to(DayType::Legs));
    }

    #[test]
    fn test_focus_day_exempts_arms() {
        let c = counts(&[
            (MuscleGroup::Shoulders, 2),
            (MuscleGroup::Biceps, 2),
            (MuscleGroup::Triceps, 2),
        ]);
        assert!(concentration_violations(DayType::ShouldersArms, &c, 6).is_empty());
        let v = concentration_violations(DayType::Upper, &c, 6);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].muscle, MuscleGroup::Biceps);
        assert_eq!(v[0].rule.reason, RejectionReason::SmallMuscleConcentration);
    }

    #[test]
    fn test_lower_day_requires_quads_posterior_and_glutes() {
        let c = counts(&[(MuscleGroup::Quadriceps, 3), (MuscleGroup::Calves, 2)]);
        assert_eq!(
            missing_required(DayType::Lower, &c),
            vec![MuscleGroup::Posterior, MuscleGroup::Glutes]
        );
        assert!(missing_required(DayType::Upper, &c).is_empty());
    }
}
