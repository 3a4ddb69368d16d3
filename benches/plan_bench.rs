// ABOUTME: Criterion benchmarks for plan generation, validation and nutrition correction
// ABOUTME: Measures the synchronous policy functions across split types and locations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the plan engine.
//!
//! Every policy function is pure, so these measure raw CPU cost per call.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fitplan_engine::config::MetricsConfig;
use fitplan_engine::metrics::RejectionRecorder;
use fitplan_engine::models::{
    ActivityLevel, Macros, NutritionPlan, RejectionContext, RejectionReason, UserProfile,
};
use fitplan_engine::nutrition::validate_and_correct_nutrition;
use fitplan_engine::training::{
    generate_training_plan_structure, validate_training_plan, PlanRequest,
};

fn bench_plan_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_generation");

    for days in [3_usize, 4, 6] {
        for location in ["academia", "casa", "ar_livre"] {
            let request = PlanRequest {
                training_location: Some(location.to_owned()),
                has_knee_restriction: days == 6,
                ..PlanRequest::new(days, "Atleta")
            };
            group.bench_with_input(
                BenchmarkId::new(location, days),
                &request,
                |b, request| {
                    b.iter(|| generate_training_plan_structure(black_box(request)));
                },
            );
        }
    }

    group.finish();
}

fn bench_plan_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_validation");

    for days in [3_usize, 6] {
        let plan = generate_training_plan_structure(&PlanRequest::new(days, "Moderado"));
        group.bench_with_input(BenchmarkId::from_parameter(days), &plan, |b, plan| {
            b.iter(|| {
                validate_training_plan(black_box(plan), days, ActivityLevel::Moderado, Some(60))
            });
        });
    }

    group.finish();
}

fn bench_nutrition_correction(c: &mut Criterion) {
    let profile = UserProfile {
        weight: 149.0,
        height: 160.0,
        age: 34,
        gender: "Feminino".to_owned(),
        imc: None,
        nivel_atividade: "Sedentário".to_owned(),
        objective: "Ganho de Massa".to_owned(),
        training_frequency: Some(4),
        cardio_frequency: Some(4),
        cardio_intensity: None,
    };
    let plan = NutritionPlan {
        daily_calories: 2400,
        macros: Macros {
            protein: "336g".to_owned(),
            carbs: "250g".to_owned(),
            fats: "70g".to_owned(),
        },
        meal_plan: Vec::new(),
        hydration: "3L".to_owned(),
        supplements: None,
    };

    c.bench_function("nutrition_correction", |b| {
        b.iter(|| validate_and_correct_nutrition(black_box(plan.clone()), black_box(&profile)));
    });
}

fn bench_rejection_recording(c: &mut Criterion) {
    let recorder = RejectionRecorder::in_memory(&MetricsConfig::default());
    c.bench_function("record_plan_rejection", |b| {
        b.iter(|| {
            recorder.record_plan_rejection(
                RejectionReason::SmallMuscleConcentration,
                RejectionContext::for_plan("Moderado", 8),
            );
        });
    });
}

criterion_group!(
    benches,
    bench_plan_generation,
    bench_plan_validation,
    bench_nutrition_correction,
    bench_rejection_recording
);
criterion_main!(benches);
