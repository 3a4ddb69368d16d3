// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, synthetic training days, profiles and nutrition plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `fitplan_engine`

use fitplan_engine::models::{
    DayType, Environment, Exercise, ExerciseInstance, ExerciseRole, Macros, Meal, MovementPattern,
    MuscleGroup, NutritionPlan, TrainingDay, TrainingPlan, UserProfile,
};
use std::borrow::Cow;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Synthetic exercise for `muscle`, numbered so names stay unique within a day
pub fn synthetic_exercise(muscle: MuscleGroup, index: usize) -> ExerciseInstance {
    ExerciseInstance {
        exercise: Exercise {
            name: Cow::Owned(format!("{} {}", muscle.label(), index + 1)),
            primary_muscle: muscle,
            pattern: MovementPattern::Other,
            role: ExerciseRole::Isolated,
            environment: Environment::Gym,
        },
        sets: 3,
        reps: "10-12".to_owned(),
        rest: "60s".to_owned(),
        notes: None,
    }
}

/// Training day holding `count` synthetic exercises per listed muscle, in order
pub fn day(label: &str, day_type: DayType, groups: &[(MuscleGroup, usize)]) -> TrainingDay {
    let exercises = groups
        .iter()
        .flat_map(|&(muscle, count)| (0..count).map(move |i| synthetic_exercise(muscle, i)))
        .collect();
    TrainingDay {
        day: label.to_owned(),
        day_type,
        exercises,
    }
}

/// Plan wrapping the given days
pub fn plan(days: Vec<TrainingDay>) -> TrainingPlan {
    TrainingPlan {
        overview: "Plano de teste".to_owned(),
        progression: "Progressão linear".to_owned(),
        weekly_schedule: days,
        gaps: Vec::new(),
    }
}

/// Profile with the physiological fields set and everything else neutral
pub fn profile(gender: &str, weight: f64, height: f64, age: u32, imc: Option<f64>) -> UserProfile {
    UserProfile {
        weight,
        height,
        age,
        gender: gender.to_owned(),
        imc,
        nivel_atividade: "Moderado".to_owned(),
        objective: "Ganho de Massa".to_owned(),
        training_frequency: None,
        cardio_frequency: None,
        cardio_intensity: None,
    }
}

/// Female profile in the high obesity range
pub fn obese_female_profile() -> UserProfile {
    profile("Feminino", 149.0, 160.0, 34, Some(58.1))
}

/// Lean adult male profile (IMC about 24.7)
pub fn lean_male_profile() -> UserProfile {
    profile("Masculino", 80.0, 180.0, 30, None)
}

/// Nutrition plan with the given protein target
pub fn nutrition_plan(protein: &str) -> NutritionPlan {
    NutritionPlan {
        daily_calories: 2400,
        macros: Macros {
            protein: protein.to_owned(),
            carbs: "250g".to_owned(),
            fats: "70g".to_owned(),
        },
        meal_plan: vec![
            Meal {
                name: "Café da manhã".to_owned(),
                time: Some("07:00".to_owned()),
                foods: vec!["Ovos".to_owned(), "Aveia".to_owned()],
                calories: Some(550),
            },
            Meal {
                name: "Almoço".to_owned(),
                time: Some("12:30".to_owned()),
                foods: vec!["Arroz".to_owned(), "Feijão".to_owned(), "Frango".to_owned()],
                calories: Some(850),
            },
        ],
        hydration: "3L de água por dia".to_owned(),
        supplements: Some(vec!["Creatina".to_owned()]),
    }
}
