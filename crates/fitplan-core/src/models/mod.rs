// ABOUTME: Core data models for exercises, plans, nutrition, profiles and rejections
// ABOUTME: Shared serde shapes exchanged with the orchestrator plus lenient label parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data model shared by every engine component. Field names serialize in
//! camelCase to match the payloads produced and consumed by the orchestrator.

/// Exercise reference data and prescribed exercise instances
pub mod exercise;
/// Nutrition plan and macro targets
pub mod nutrition;
/// Training days, weekly schedules and split types
pub mod plan;
/// User profile and the coarse labels it carries
pub mod profile;
/// Rejection reasons recorded when a candidate plan fails validation
pub mod rejection;

pub use exercise::{
    Environment, Exercise, ExerciseInstance, ExerciseRole, JointStress, MovementPattern,
    MuscleGroup,
};
pub use nutrition::{parse_gram_quantity, Macros, Meal, NutritionPlan};
pub use plan::{DayType, GenerationGap, SplitType, TrainingDay, TrainingPlan};
pub use profile::{ActivityLevel, Gender, TrainingLocation, UserProfile};
pub use rejection::{RejectionContext, RejectionReason};

/// Normalize a free-text label for comparison
///
/// Lowercases, folds Portuguese accents to ASCII and drops every character
/// that is not alphanumeric, so `"Ar Livre"`, `"ar_livre"` and `"AR-LIVRE"`
/// all become `"arlivre"`.
#[must_use]
pub fn normalize_label(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize_label;

    #[test]
    fn test_normalize_label_folds_accents_and_separators() {
        assert_eq!(normalize_label("Ar Livre"), "arlivre");
        assert_eq!(normalize_label("ar_livre"), "arlivre");
        assert_eq!(normalize_label("Recomposição"), "recomposicao");
        assert_eq!(normalize_label("Push/Pull/Legs"), "pushpulllegs");
    }
}
