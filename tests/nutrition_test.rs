// ABOUTME: Integration tests for the nutrition protein corrector
// ABOUTME: Covers lean-mass ceilings, absolute obesity caps, malformed targets and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{lean_male_profile, nutrition_plan, obese_female_profile, profile};
use fitplan_engine::config::NutritionPolicyConfig;
use fitplan_engine::nutrition::corrector::validate_and_correct_nutrition_with_config;
use fitplan_engine::nutrition::{protein_ceiling, validate_and_correct_nutrition};

// ============================================================================
// Absolute caps in the obesity range
// ============================================================================

#[test]
fn test_obese_female_protein_is_capped_at_180g() {
    common::init_test_logging();
    let correction =
        validate_and_correct_nutrition(nutrition_plan("336g"), &obese_female_profile());

    assert!(correction.was_adjusted);
    assert_eq!(correction.plan.macros.protein, "180g");
    assert_eq!(correction.protein_cap_g, 180);
}

#[test]
fn test_obese_male_protein_is_capped_at_220g() {
    let obese_male = profile("Masculino", 112.0, 185.0, 40, Some(32.7));
    let correction = validate_and_correct_nutrition(nutrition_plan("260g"), &obese_male);
    assert!(correction.was_adjusted);
    assert_eq!(correction.plan.macros.protein, "220g");
}

#[test]
fn test_unstated_gender_uses_conservative_absolute_cap() {
    let other = profile("Prefiro não informar", 120.0, 170.0, 45, None);
    let ceiling = protein_ceiling(&other, &NutritionPolicyConfig::default());
    assert!(ceiling.absolute_cap_applied);
    assert_eq!(ceiling.cap_g, 180);
}

// ============================================================================
// Lean-mass ceiling
// ============================================================================

#[test]
fn test_lean_male_ceiling_from_lean_mass() {
    let ceiling = protein_ceiling(&lean_male_profile(), &NutritionPolicyConfig::default());
    assert!(!ceiling.absolute_cap_applied);
    assert!((ceiling.estimated_body_fat_percent - 20.33).abs() < 0.01);
    assert!((ceiling.lean_body_mass_kg - 63.74).abs() < 0.01);
    assert_eq!(ceiling.cap_g, 140);
}

#[test]
fn test_target_above_lean_mass_ceiling_is_capped() {
    let correction = validate_and_correct_nutrition(nutrition_plan("200g"), &lean_male_profile());
    assert!(correction.was_adjusted);
    assert_eq!(correction.plan.macros.protein, "140g");
}

#[test]
fn test_target_within_ceiling_is_untouched() {
    for protein in ["120g", "140g", "95 g"] {
        let plan = nutrition_plan(protein);
        let correction = validate_and_correct_nutrition(plan.clone(), &lean_male_profile());
        assert!(!correction.was_adjusted, "{protein} should pass");
        assert_eq!(correction.plan, plan);
    }
}

// ============================================================================
// Malformed input and idempotence
// ============================================================================

#[test]
fn test_malformed_protein_is_replaced_with_ceiling() {
    for protein in ["", "bastante", "2kg", "g"] {
        let correction =
            validate_and_correct_nutrition(nutrition_plan(protein), &obese_female_profile());
        assert!(correction.was_adjusted, "{protein:?} should be replaced");
        assert_eq!(correction.plan.macros.protein, "180g");
    }
}

#[test]
fn test_correction_is_idempotent() {
    let profile = obese_female_profile();
    let once = validate_and_correct_nutrition(nutrition_plan("336g"), &profile);
    let twice = validate_and_correct_nutrition(once.plan.clone(), &profile);
    assert!(!twice.was_adjusted);
    assert_eq!(twice.plan, once.plan);
}

#[test]
fn test_other_fields_pass_through() {
    let original = nutrition_plan("336g");
    let correction = validate_and_correct_nutrition(original.clone(), &obese_female_profile());
    let corrected = correction.plan;

    assert_eq!(corrected.daily_calories, original.daily_calories);
    assert_eq!(corrected.macros.carbs, original.macros.carbs);
    assert_eq!(corrected.macros.fats, original.macros.fats);
    assert_eq!(corrected.meal_plan, original.meal_plan);
    assert_eq!(corrected.hydration, original.hydration);
    assert_eq!(corrected.supplements, original.supplements);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_configured_caps_are_honoured() {
    let config = NutritionPolicyConfig {
        obese_female_protein_cap_g: 160,
        ..NutritionPolicyConfig::default()
    };
    let correction = validate_and_correct_nutrition_with_config(
        nutrition_plan("336g"),
        &obese_female_profile(),
        &config,
    );
    assert_eq!(correction.plan.macros.protein, "160g");
}

#[test]
fn test_plan_json_shape_round_trips_through_correction() {
    let json = r#"{
        "dailyCalories": 2100,
        "macros": {"protein": "336g", "carbs": "200g", "fats": "60g"},
        "mealPlan": [{"name": "Jantar", "foods": ["Peixe", "Salada"]}],
        "hydration": "2.5L"
    }"#;
    let plan = serde_json::from_str(json).unwrap();
    let correction = validate_and_correct_nutrition(plan, &obese_female_profile());
    let value = serde_json::to_value(&correction.plan).unwrap();
    assert_eq!(value["macros"]["protein"], "180g");
    assert_eq!(value["mealPlan"][0]["name"], "Jantar");
    assert!(value.get("supplements").is_none());
}
