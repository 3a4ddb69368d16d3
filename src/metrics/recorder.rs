// ABOUTME: Rejection recorder with consistent counters by reason, activity level and day type
// ABOUTME: Persists events on a spawned task so storage failures never reach the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RejectionEvent, RejectionSnapshot, RejectionStore};
use crate::config::MetricsConfig;
use crate::training::PlanVerdict;
use chrono::Utc;
use fitplan_core::errors::AppResult;
use fitplan_core::models::{RejectionContext, RejectionReason};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, warn};

/// Process-wide rejection aggregates
///
/// Cloning is cheap; clones share the same counters and store.
#[derive(Clone)]
pub struct RejectionRecorder {
    state: Arc<RecorderState>,
}

struct RecorderState {
    counters: Mutex<Counters>,
    max_retained_events: usize,
    store: Option<Arc<dyn RejectionStore>>,
}

/// Every aggregate, updated and read under one lock so a snapshot never sees
/// a rejection counted by reason but not yet by level or day type
#[derive(Default)]
struct Counters {
    total: u64,
    by_reason: BTreeMap<String, u64>,
    by_activity_level: BTreeMap<String, u64>,
    by_day_type: BTreeMap<String, u64>,
    recent: VecDeque<RejectionEvent>,
}

impl Counters {
    fn apply(&mut self, event: RejectionEvent, max_retained_events: usize) {
        self.total += 1;
        *self
            .by_reason
            .entry(event.reason.tag().to_owned())
            .or_insert(0) += 1;
        *self
            .by_activity_level
            .entry(event.context.activity_level.clone())
            .or_insert(0) += 1;
        *self
            .by_day_type
            .entry(event.context.day_type_key().to_owned())
            .or_insert(0) += 1;

        if max_retained_events == 0 {
            return;
        }
        while self.recent.len() >= max_retained_events {
            self.recent.pop_front();
        }
        self.recent.push_back(event);
    }
}

impl RejectionRecorder {
    /// Recorder that only aggregates in memory
    #[must_use]
    pub fn in_memory(config: &MetricsConfig) -> Self {
        Self::build(config, None)
    }

    /// Recorder that also forwards events to `store`
    ///
    /// The store is ignored when persistence is disabled in `config`.
    #[must_use]
    pub fn with_store(config: &MetricsConfig, store: Arc<dyn RejectionStore>) -> Self {
        let store = config.persistence_enabled.then_some(store);
        Self::build(config, store)
    }

    fn build(config: &MetricsConfig, store: Option<Arc<dyn RejectionStore>>) -> Self {
        Self {
            state: Arc::new(RecorderState {
                counters: Mutex::new(Counters::default()),
                max_retained_events: config.max_retained_events,
                store,
            }),
        }
    }

    /// Record a rejection without waiting for persistence
    ///
    /// Counters are updated before returning. When a store is attached and a
    /// tokio runtime is running, the write happens on a spawned task; write
    /// failures are logged and otherwise ignored.
    pub fn record_plan_rejection(&self, reason: RejectionReason, context: RejectionContext) {
        let event = self.aggregate(reason, context);
        let Some(store) = self.state.store.clone() else {
            return;
        };

        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    persist_best_effort(store.as_ref(), &event).await;
                });
            }
            Err(_) => {
                debug!(
                    reason = %event.reason,
                    "No tokio runtime available, rejection kept in memory only"
                );
            }
        }
    }

    /// Record a rejection and wait for the store write to finish
    ///
    /// Persistence failures are logged, never returned.
    pub async fn record_plan_rejection_and_wait(
        &self,
        reason: RejectionReason,
        context: RejectionContext,
    ) {
        let event = self.aggregate(reason, context);
        if let Some(store) = self.state.store.as_deref() {
            persist_best_effort(store, &event).await;
        }
    }

    /// Record every rejection of a verdict
    pub fn record_verdict(&self, verdict: &PlanVerdict) {
        for rejection in &verdict.rejections {
            self.record_plan_rejection(rejection.reason, rejection.context.clone());
        }
    }

    /// Aggregate counts
    ///
    /// `None` returns all-time counters. A window is answered from the
    /// retained event log, so it only sees the most recent
    /// `max_retained_events` rejections.
    #[must_use]
    pub fn snapshot(&self, window: Option<Duration>) -> RejectionSnapshot {
        let counters = self.counters();
        match window {
            None => RejectionSnapshot {
                total: counters.total,
                by_reason: counters.by_reason.clone(),
                by_activity_level: counters.by_activity_level.clone(),
                by_day_type: counters.by_day_type.clone(),
                window_seconds: None,
            },
            Some(window) => {
                let since = chrono::Duration::from_std(window)
                    .ok()
                    .and_then(|w| Utc::now().checked_sub_signed(w));
                RejectionSnapshot::from_events(
                    counters
                        .recent
                        .iter()
                        .filter(|e| since.is_none_or(|s| e.recorded_at >= s)),
                    Some(window.as_secs()),
                )
            }
        }
    }

    /// Rebuild the in-memory counters from the stored events
    ///
    /// The store is the source of truth: counters recorded before the call
    /// are replaced, not added to, so restoring twice yields the same totals.
    /// Call it at startup so all-time counters survive a restart.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read; the counters are left
    /// untouched in that case
    pub async fn restore_from_store(&self) -> AppResult<usize> {
        let Some(store) = self.state.store.as_deref() else {
            return Ok(0);
        };
        let events = store.load_since(None).await?;
        let restored = events.len();

        let mut rebuilt = Counters::default();
        for event in events {
            rebuilt.apply(event, self.state.max_retained_events);
        }
        *self.counters() = rebuilt;

        debug!(restored, "Restored rejection counters from store");
        Ok(restored)
    }

    fn aggregate(&self, reason: RejectionReason, context: RejectionContext) -> RejectionEvent {
        warn!(
            reason = %reason,
            activity_level = %context.activity_level,
            day_type = context.day_type_key(),
            exercise_count = context.exercise_count,
            "Training plan rejected"
        );
        let event = RejectionEvent::new(reason, context);
        self.apply(event.clone());
        event
    }

    fn apply(&self, event: RejectionEvent) {
        self.counters().apply(event, self.state.max_retained_events);
    }

    fn counters(&self) -> MutexGuard<'_, Counters> {
        self.state
            .counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

async fn persist_best_effort(store: &dyn RejectionStore, event: &RejectionEvent) {
    if let Err(e) = store.persist(event).await {
        warn!(
            reason = %event.reason,
            error = %e,
            "Failed to persist plan rejection, keeping in-memory aggregate only"
        );
    }
}

