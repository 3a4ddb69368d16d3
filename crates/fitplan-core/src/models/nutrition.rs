// ABOUTME: Nutrition plan model with unit-suffixed macro targets and meal plan
// ABOUTME: Includes the parser for gram quantities such as "180g"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Daily macro targets, each a quantity with unit (e.g. `"180g"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    /// Protein target
    pub protein: String,
    /// Carbohydrate target
    pub carbs: String,
    /// Fat target
    pub fats: String,
}

/// One meal of the meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Meal name, e.g. "Café da manhã"
    pub name: String,
    /// Suggested time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Foods in the meal
    #[serde(default)]
    pub foods: Vec<String>,
    /// Meal energy in kcal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
}

/// Nutrition plan produced alongside a training plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlan {
    /// Daily energy target in kcal
    pub daily_calories: u32,
    /// Macro targets
    pub macros: Macros,
    /// Ordered meals
    pub meal_plan: Vec<Meal>,
    /// Hydration guidance
    pub hydration: String,
    /// Optional supplement list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplements: Option<Vec<String>>,
}

/// Parse a gram quantity such as `"180g"`, `"180 g"`, `"92.5g"` or `"150 gramas"`
///
/// Returns `None` for empty strings, negative or non-finite numbers, and
/// units other than grams.
#[must_use]
pub fn parse_gram_quantity(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let split_at = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split_at);
    if number.is_empty() {
        return None;
    }

    let unit = unit.trim().to_lowercase();
    if !matches!(unit.as_str(), "" | "g" | "gr" | "grams" | "gramas") {
        return None;
    }

    let value: f64 = number.replace(',', ".").parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}
