// ABOUTME: Integration tests for the rejection metrics recorder and its stores
// ABOUTME: Covers concurrent counting, time windows, failing stores, persistence and restore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitplan_engine::config::MetricsConfig;
use fitplan_engine::errors::{AppError, AppResult};
use fitplan_engine::metrics::{
    InMemoryRejectionStore, RejectionEvent, RejectionRecorder, RejectionStore,
};
use fitplan_engine::models::{DayType, RejectionContext, RejectionReason};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

struct FailingStore {
    attempts: AtomicU64,
}

#[async_trait]
impl RejectionStore for FailingStore {
    async fn persist(&self, _event: &RejectionEvent) -> AppResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AppError::database("store offline"))
    }

    async fn load_since(&self, _since: Option<DateTime<Utc>>) -> AppResult<Vec<RejectionEvent>> {
        Err(AppError::database("store offline"))
    }

    async fn count(&self) -> AppResult<u64> {
        Err(AppError::database("store offline"))
    }
}

fn day_context(level: &str, day_type: DayType) -> RejectionContext {
    RejectionContext::for_day(level, "Dia 1", day_type, 9)
}

// ============================================================================
// Counting
// ============================================================================

#[test]
fn test_counts_by_reason_level_and_day_type() {
    common::init_test_logging();
    let recorder = RejectionRecorder::in_memory(&MetricsConfig::default());

    recorder.record_plan_rejection(
        RejectionReason::LargeMuscleConcentration,
        day_context("Atleta", DayType::Legs),
    );
    recorder.record_plan_rejection(
        RejectionReason::LargeMuscleConcentration,
        day_context("Moderado", DayType::Upper),
    );
    recorder.record_plan_rejection(
        RejectionReason::ScheduleLengthMismatch,
        RejectionContext::for_plan("Atleta", 30),
    );

    let snapshot = recorder.snapshot(None);
    assert_eq!(snapshot.total, 3);
    assert_eq!(
        snapshot.reason_count(RejectionReason::LargeMuscleConcentration),
        2
    );
    assert_eq!(snapshot.reason_count(RejectionReason::ScheduleLengthMismatch), 1);
    assert_eq!(snapshot.reason_count(RejectionReason::InsufficientTime), 0);
    assert_eq!(snapshot.by_activity_level.get("Atleta"), Some(&2));
    assert_eq!(snapshot.by_day_type.get("Legs"), Some(&1));
    assert_eq!(snapshot.by_day_type.get("plan"), Some(&1));
    assert_eq!(snapshot.window_seconds, None);
}

#[test]
fn test_clones_share_counters() {
    let recorder = RejectionRecorder::in_memory(&MetricsConfig::default());
    let clone = recorder.clone();
    clone.record_plan_rejection(
        RejectionReason::InsufficientTime,
        day_context("Idoso", DayType::FullBody),
    );
    assert_eq!(recorder.snapshot(None).total, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_recording_loses_no_increments() {
    let recorder = RejectionRecorder::in_memory(&MetricsConfig::default());

    let handles: Vec<_> = (0..8)
        .map(|task| {
            let recorder = recorder.clone();
            tokio::spawn(async move {
                for _ in 0..50 {
                    let reason = if task % 2 == 0 {
                        RejectionReason::SmallMuscleConcentration
                    } else {
                        RejectionReason::ExceedsLevelCap
                    };
                    recorder.record_plan_rejection(reason, day_context("Moderado", DayType::Push));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = recorder.snapshot(None);
    assert_eq!(snapshot.total, 400);
    assert_eq!(
        snapshot.reason_count(RejectionReason::SmallMuscleConcentration),
        200
    );
    assert_eq!(snapshot.reason_count(RejectionReason::ExceedsLevelCap), 200);
    assert_eq!(snapshot.by_day_type.get("Push"), Some(&400));
}

#[test]
fn test_snapshots_stay_consistent_while_recording() {
    let recorder = RejectionRecorder::in_memory(&MetricsConfig::default());
    let cases = [
        (RejectionReason::SmallMuscleConcentration, "Moderado", DayType::Push),
        (RejectionReason::ExceedsLevelCap, "Idoso", DayType::FullBody),
        (RejectionReason::MissingRequiredGroup, "Atleta", DayType::Lower),
        (RejectionReason::InsufficientTime, "Iniciante", DayType::Upper),
    ];

    std::thread::scope(|scope| {
        let writers: Vec<_> = cases
            .iter()
            .map(|&(reason, level, day_type)| {
                let recorder = recorder.clone();
                scope.spawn(move || {
                    for _ in 0..2_000 {
                        recorder.record_plan_rejection(reason, day_context(level, day_type));
                    }
                })
            })
            .collect();

        while !writers.iter().all(std::thread::ScopedJoinHandle::is_finished) {
            let snapshot = recorder.snapshot(None);
            assert_eq!(snapshot.by_reason.values().sum::<u64>(), snapshot.total);
            assert_eq!(snapshot.by_activity_level.values().sum::<u64>(), snapshot.total);
            assert_eq!(snapshot.by_day_type.values().sum::<u64>(), snapshot.total);
        }
    });

    assert_eq!(recorder.snapshot(None).total, 8_000);
}

// ============================================================================
// Windows
// ============================================================================

#[test]
fn test_window_snapshot_counts_recent_events() {
    let recorder = RejectionRecorder::in_memory(&MetricsConfig::default());
    for _ in 0..3 {
        recorder.record_plan_rejection(
            RejectionReason::MissingRequiredGroup,
            day_context("Iniciante", DayType::Lower),
        );
    }

    let window = recorder.snapshot(Some(Duration::from_secs(3600)));
    assert_eq!(window.total, 3);
    assert_eq!(window.window_seconds, Some(3600));
    assert_eq!(window.reason_count(RejectionReason::MissingRequiredGroup), 3);
}

#[test]
fn test_window_only_sees_retained_events() {
    let config = MetricsConfig {
        max_retained_events: 2,
        ..MetricsConfig::default()
    };
    let recorder = RejectionRecorder::in_memory(&config);
    for _ in 0..5 {
        recorder.record_plan_rejection(
            RejectionReason::ExceedsLevelCap,
            day_context("Idoso", DayType::FullBody),
        );
    }

    assert_eq!(recorder.snapshot(None).total, 5);
    assert_eq!(recorder.snapshot(Some(Duration::from_secs(60))).total, 2);
}

// ============================================================================
// Stores
// ============================================================================

#[tokio::test]
async fn test_failing_store_never_reaches_caller() {
    let store = Arc::new(FailingStore {
        attempts: AtomicU64::new(0),
    });
    let recorder = RejectionRecorder::with_store(&MetricsConfig::default(), store.clone());

    recorder
        .record_plan_rejection_and_wait(
            RejectionReason::InsufficientTime,
            day_context("Atleta", DayType::Pull),
        )
        .await;
    recorder.record_plan_rejection(
        RejectionReason::InsufficientTime,
        day_context("Atleta", DayType::Pull),
    );

    assert_eq!(recorder.snapshot(None).total, 2);
    assert!(store.attempts.load(Ordering::SeqCst) >= 1);
    assert!(recorder.restore_from_store().await.is_err());
}

#[tokio::test]
async fn test_events_are_persisted_to_store() {
    let store = Arc::new(InMemoryRejectionStore::new());
    let recorder = RejectionRecorder::with_store(&MetricsConfig::default(), store.clone());

    recorder
        .record_plan_rejection_and_wait(
            RejectionReason::LargeMuscleConcentration,
            day_context("Atleta", DayType::Legs).with_measure(0.6, 0.5),
        )
        .await;

    assert_eq!(store.count().await.unwrap(), 1);
    let events = store.load_since(None).await.unwrap();
    assert_eq!(events[0].reason, RejectionReason::LargeMuscleConcentration);
    assert_eq!(events[0].context.observed, Some(0.6));
}

#[tokio::test]
async fn test_fire_and_forget_persistence_completes() {
    let store = Arc::new(InMemoryRejectionStore::new());
    let recorder = RejectionRecorder::with_store(&MetricsConfig::default(), store.clone());

    recorder.record_plan_rejection(
        RejectionReason::SmallMuscleConcentration,
        day_context("Moderado", DayType::Upper),
    );

    for _ in 0..100 {
        if store.count().await.unwrap() == 1 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("spawned persistence never completed");
}

#[tokio::test]
async fn test_disabled_persistence_skips_store() {
    let store = Arc::new(InMemoryRejectionStore::new());
    let config = MetricsConfig {
        persistence_enabled: false,
        ..MetricsConfig::default()
    };
    let recorder = RejectionRecorder::with_store(&config, store.clone());

    recorder
        .record_plan_rejection_and_wait(
            RejectionReason::ExceedsLevelCap,
            day_context("Idoso", DayType::FullBody),
        )
        .await;

    assert_eq!(recorder.snapshot(None).total, 1);
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_restore_rebuilds_counters_from_store() {
    let store = Arc::new(InMemoryRejectionStore::new());
    let first = RejectionRecorder::with_store(&MetricsConfig::default(), store.clone());
    for level in ["Atleta", "Atleta", "Idoso"] {
        first
            .record_plan_rejection_and_wait(
                RejectionReason::ExceedsLevelCap,
                day_context(level, DayType::Upper),
            )
            .await;
    }

    let restarted = RejectionRecorder::with_store(&MetricsConfig::default(), store);
    assert_eq!(restarted.snapshot(None).total, 0);
    assert_eq!(restarted.restore_from_store().await.unwrap(), 3);

    let snapshot = restarted.snapshot(None);
    assert_eq!(snapshot.total, 3);
    assert_eq!(snapshot.by_activity_level.get("Atleta"), Some(&2));
}

#[tokio::test]
async fn test_restore_replaces_counters_instead_of_adding() {
    let store = Arc::new(InMemoryRejectionStore::new());
    let recorder = RejectionRecorder::with_store(&MetricsConfig::default(), store);
    for _ in 0..3 {
        recorder
            .record_plan_rejection_and_wait(
                RejectionReason::SmallMuscleConcentration,
                day_context("Moderado", DayType::Pull),
            )
            .await;
    }
    assert_eq!(recorder.snapshot(None).total, 3);

    assert_eq!(recorder.restore_from_store().await.unwrap(), 3);
    assert_eq!(recorder.snapshot(None).total, 3);
    assert_eq!(recorder.restore_from_store().await.unwrap(), 3);

    let snapshot = recorder.snapshot(None);
    assert_eq!(snapshot.total, 3);
    assert_eq!(snapshot.by_day_type.get("Pull"), Some(&3));
    assert_eq!(recorder.snapshot(Some(Duration::from_secs(60))).total, 3);
}

#[tokio::test]
async fn test_failed_restore_keeps_live_counters() {
    let store = Arc::new(FailingStore {
        attempts: AtomicU64::new(0),
    });
    let recorder = RejectionRecorder::with_store(&MetricsConfig::default(), store);
    recorder.record_plan_rejection(
        RejectionReason::ExceedsLevelCap,
        day_context("Idoso", DayType::FullBody),
    );

    assert!(recorder.restore_from_store().await.is_err());
    assert_eq!(recorder.snapshot(None).total, 1);
}

#[tokio::test]
async fn test_memory_store_keeps_one_copy_per_event() {
    let store = InMemoryRejectionStore::new();
    let event = RejectionEvent::new(
        RejectionReason::ExceedsLevelCap,
        day_context("Idoso", DayType::FullBody),
    );
    store.persist(&event).await.unwrap();
    store.persist(&event).await.unwrap();
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_load_since_filters_older_events() {
    let store = InMemoryRejectionStore::new();
    let event = RejectionEvent::new(
        RejectionReason::MissingRequiredGroup,
        day_context("Moderado", DayType::Lower),
    );
    store.persist(&event).await.unwrap();

    let later = event.recorded_at + chrono::Duration::seconds(1);
    assert!(store.load_since(Some(later)).await.unwrap().is_empty());
    assert_eq!(
        store
            .load_since(Some(event.recorded_at))
            .await
            .unwrap()
            .len(),
        1
    );
}

// ============================================================================
// SQLite store
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::{day_context, RejectionRecorder};
    use fitplan_engine::config::MetricsConfig;
    use fitplan_engine::metrics::{RejectionStore, SqliteRejectionStore};
    use fitplan_engine::models::{DayType, MuscleGroup, RejectionReason};
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_sqlite_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}", dir.path().join("rejections.db").display());

        {
            let store = Arc::new(SqliteRejectionStore::connect(&url).await.unwrap());
            let recorder = RejectionRecorder::with_store(&MetricsConfig::default(), store.clone());
            recorder
                .record_plan_rejection_and_wait(
                    RejectionReason::LargeMuscleConcentration,
                    day_context("Atleta", DayType::Legs)
                        .with_muscle(MuscleGroup::Quadriceps)
                        .with_measure(0.6, 0.5),
                )
                .await;
            recorder
                .record_plan_rejection_and_wait(
                    RejectionReason::InsufficientTime,
                    day_context("Atleta", DayType::Legs),
                )
                .await;
            assert_eq!(store.count().await.unwrap(), 2);
        }

        let reopened = Arc::new(SqliteRejectionStore::connect(&url).await.unwrap());
        let events = reopened.load_since(None).await.unwrap();
        assert_eq!(events.len(), 2);
        let concentration = events
            .iter()
            .find(|e| e.reason == RejectionReason::LargeMuscleConcentration)
            .unwrap();
        assert_eq!(concentration.context.muscle, Some(MuscleGroup::Quadriceps));
        assert_eq!(concentration.context.day_type, Some(DayType::Legs));

        let recorder = RejectionRecorder::with_store(&MetricsConfig::default(), reopened);
        assert_eq!(recorder.restore_from_store().await.unwrap(), 2);
        assert_eq!(recorder.snapshot(None).total, 2);
    }

    #[tokio::test]
    async fn test_sqlite_load_since_filters_by_time() {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}", dir.path().join("window.db").display());
        let store = SqliteRejectionStore::connect(&url).await.unwrap();
        let recorder =
            RejectionRecorder::with_store(&MetricsConfig::default(), Arc::new(store.clone()));
        recorder
            .record_plan_rejection_and_wait(
                RejectionReason::ExceedsLevelCap,
                day_context("Idoso", DayType::FullBody),
            )
            .await;

        let future = chrono::Utc::now() + chrono::Duration::hours(1);
        assert!(store.load_since(Some(future)).await.unwrap().is_empty());
        let past = chrono::Utc::now() - chrono::Duration::hours(1);
        assert_eq!(store.load_since(Some(past)).await.unwrap().len(), 1);
    }
}
