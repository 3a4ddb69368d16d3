// ABOUTME: Fitplan CLI - runs the plan engine locally and prints JSON results
// ABOUTME: Generates, validates and corrects plans and inspects rejection metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate a 4-day home plan for an intermediate user
//! fitplan-cli generate --days 4 --level Moderado --location casa
//!
//! # Generate with validation and retries
//! fitplan-cli generate --days 5 --level Atleta --retry
//!
//! # Validate a stored plan
//! fitplan-cli validate --plan plan.json --days 4 --level Moderado --minutes 60
//!
//! # Check an exercise count against a level
//! fitplan-cli count 6 --level Idoso
//!
//! # Correct a nutrition plan for a profile
//! fitplan-cli nutrition --plan nutrition.json --profile profile.json
//!
//! # Initial cardio prescription
//! fitplan-cli cardio --profile profile.json
//!
//! # Rejection statistics from the durable store
//! fitplan-cli metrics --database-url sqlite:./data/rejections.db --window-hours 24
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitplan_engine::cardio::determine_cardio_progression;
use fitplan_engine::config::EngineConfig;
use fitplan_engine::logging::LoggingConfig;
use fitplan_engine::metrics::RejectionRecorder;
use fitplan_engine::models::{NutritionPlan, TrainingPlan, UserProfile};
use fitplan_engine::pipeline::PlanPipeline;
use fitplan_engine::training::{
    generate_training_plan_structure, resolve_activity_level, validate_exercises_count_by_level,
    validate_training_plan, PlanRequest,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fitplan-cli",
    about = "Fitness plan engine CLI",
    long_about = "Runs the training plan generator, validator and nutrition corrector \
                  locally and prints JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a weekly training plan
    Generate {
        /// Training days per week
        #[arg(long)]
        days: usize,

        /// Activity level label (e.g. "Moderado")
        #[arg(long)]
        level: String,

        /// Split label (e.g. "Upper/Lower"); chosen from the frequency when omitted
        #[arg(long)]
        split: Option<String>,

        /// Minutes available per session
        #[arg(long)]
        minutes: Option<u32>,

        /// Training location ("casa", "academia", "ar_livre")
        #[arg(long)]
        location: Option<String>,

        /// Exclude movements that load the shoulder
        #[arg(long)]
        shoulder_restriction: bool,

        /// Exclude movements that load the knee
        #[arg(long)]
        knee_restriction: bool,

        /// Body mass index
        #[arg(long)]
        imc: Option<f64>,

        /// Stated objective
        #[arg(long)]
        objective: Option<String>,

        /// Rotation seed for exercise choice
        #[arg(long, default_value = "0")]
        variation: u32,

        /// Upper bound on exercises per day, below the level cap
        #[arg(long)]
        max_exercises: Option<usize>,

        /// Validate and regenerate until the plan passes
        #[arg(long)]
        retry: bool,
    },

    /// Validate a training plan stored as JSON
    Validate {
        /// Path to the plan JSON
        #[arg(long)]
        plan: String,

        /// Requested training days per week
        #[arg(long)]
        days: usize,

        /// Activity level label
        #[arg(long)]
        level: String,

        /// Minutes available per session
        #[arg(long)]
        minutes: Option<u32>,
    },

    /// Check an exercise count against a level's cap
    Count {
        /// Exercises in the session
        count: usize,

        /// Activity level label
        #[arg(long)]
        level: String,
    },

    /// Interpret the objective and cap the protein target of a nutrition plan
    Nutrition {
        /// Path to the nutrition plan JSON
        #[arg(long)]
        plan: String,

        /// Path to the user profile JSON
        #[arg(long)]
        profile: String,
    },

    /// Initial cardio frequency and intensity for a profile
    Cardio {
        /// Path to the user profile JSON
        #[arg(long)]
        profile: String,
    },

    /// Rejection statistics from the durable store
    #[cfg(feature = "sqlite")]
    Metrics {
        /// SQLite database URL
        #[arg(long)]
        database_url: Option<String>,

        /// Only count rejections from the last N hours
        #[arg(long)]
        window_hours: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let config = EngineConfig::global();

    match cli.command {
        Command::Generate {
            days,
            level,
            split,
            minutes,
            location,
            shoulder_restriction,
            knee_restriction,
            imc,
            objective,
            variation,
            max_exercises,
            retry,
        } => {
            let request = PlanRequest {
                split_type: split,
                available_minutes_per_session: minutes,
                imc,
                objective,
                has_shoulder_restriction: shoulder_restriction,
                has_knee_restriction: knee_restriction,
                training_location: location,
                variation,
                max_exercises_per_session: max_exercises,
                ..PlanRequest::new(days, level)
            };
            if retry {
                let pipeline =
                    PlanPipeline::new(RejectionRecorder::in_memory(&config.metrics), config);
                let outcome = pipeline.generate(&request);
                info!(
                    accepted = outcome.is_accepted(),
                    attempts = outcome.attempts,
                    "Pipeline finished"
                );
                print_json(&outcome)?;
            } else {
                print_json(&generate_training_plan_structure(&request))?;
            }
        }
        Command::Validate {
            plan,
            days,
            level,
            minutes,
        } => {
            let plan: TrainingPlan = read_json(&plan)?;
            let verdict =
                validate_training_plan(&plan, days, resolve_activity_level(&level), minutes);
            print_json(&verdict)?;
        }
        Command::Count { count, level } => {
            print_json(&serde_json::json!({
                "count": count,
                "level": resolve_activity_level(&level).label(),
                "allowed": validate_exercises_count_by_level(count, &level),
            }))?;
        }
        Command::Nutrition { plan, profile } => {
            let plan: NutritionPlan = read_json(&plan)?;
            let profile: UserProfile = read_json(&profile)?;
            let pipeline = PlanPipeline::new(RejectionRecorder::in_memory(&config.metrics), config);
            print_json(&pipeline.prepare_nutrition(plan, &profile))?;
        }
        Command::Cardio { profile } => {
            let profile: UserProfile = read_json(&profile)?;
            print_json(&determine_cardio_progression(&profile))?;
        }
        #[cfg(feature = "sqlite")]
        Command::Metrics {
            database_url,
            window_hours,
        } => {
            use fitplan_engine::metrics::SqliteRejectionStore;
            use std::sync::Arc;

            let database_url = database_url
                .or_else(|| config.metrics.database_url.clone())
                .unwrap_or_else(|| "sqlite:./data/rejections.db".into());
            info!("Connecting to rejection store: {}", database_url);
            let store = SqliteRejectionStore::connect(&database_url).await?;
            let recorder = RejectionRecorder::with_store(&config.metrics, Arc::new(store));
            recorder.restore_from_store().await?;
            let window = window_hours.map(|h| Duration::from_secs(h.saturating_mul(3600)));
            print_json(&recorder.snapshot(window))?;
        }
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let raw =
        fs::read_to_string(Path::new(path)).with_context(|| format!("Failed to read {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {path}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
