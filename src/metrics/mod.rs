// ABOUTME: Rejection metrics for the generate-validate-retry loop
// ABOUTME: Pluggable rejection stores plus the recorder that aggregates counters in memory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rejection Metrics
//!
//! [`RejectionRecorder`] keeps process-wide counters by reason, activity
//! level and day type, plus a bounded event log for time-window queries.
//! Durable storage is an injected [`RejectionStore`]; persistence is best
//! effort and never affects the plan result.

/// In-memory rejection store
pub mod memory;
/// Recorder with consistent aggregate counters
pub mod recorder;
/// SQLite rejection store
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use memory::InMemoryRejectionStore;
pub use recorder::RejectionRecorder;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRejectionStore;

use chrono::{DateTime, Utc};
use fitplan_core::errors::AppResult;
use fitplan_core::models::{RejectionContext, RejectionReason};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One recorded plan rejection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionEvent {
    /// Event identifier
    pub id: Uuid,
    /// Why the candidate plan failed
    pub reason: RejectionReason,
    /// Where it failed
    pub context: RejectionContext,
    /// When the rejection was recorded
    pub recorded_at: DateTime<Utc>,
}

impl RejectionEvent {
    /// New event stamped with the current time
    #[must_use]
    pub fn new(reason: RejectionReason, context: RejectionContext) -> Self {
        Self {
            id: Uuid::new_v4(),
            reason,
            context,
            recorded_at: Utc::now(),
        }
    }
}

/// Durable storage for rejection events
///
/// Implementations must be safe to call from many tasks at once.
#[async_trait::async_trait]
pub trait RejectionStore: Send + Sync {
    /// Store one event
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails
    async fn persist(&self, event: &RejectionEvent) -> AppResult<()>;

    /// Events recorded at or after `since`, oldest first; every event when `None`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails
    async fn load_since(&self, since: Option<DateTime<Utc>>) -> AppResult<Vec<RejectionEvent>>;

    /// Number of stored events
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails
    async fn count(&self) -> AppResult<u64>;
}

/// Read-only aggregate view of recorded rejections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionSnapshot {
    /// Rejections counted
    pub total: u64,
    /// Counts keyed by reason tag
    pub by_reason: BTreeMap<String, u64>,
    /// Counts keyed by activity level label
    pub by_activity_level: BTreeMap<String, u64>,
    /// Counts keyed by day type (`"plan"` for plan-level reasons)
    pub by_day_type: BTreeMap<String, u64>,
    /// Window length in seconds; `None` for all-time counters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_seconds: Option<u64>,
}

impl RejectionSnapshot {
    /// Count for a reason
    #[must_use]
    pub fn reason_count(&self, reason: RejectionReason) -> u64 {
        self.by_reason.get(reason.tag()).copied().unwrap_or(0)
    }

    /// Aggregate a list of events
    #[must_use]
    pub fn from_events<'a>(
        events: impl IntoIterator<Item = &'a RejectionEvent>,
        window_seconds: Option<u64>,
    ) -> Self {
        let mut snapshot = Self {
            window_seconds,
            ..Self::default()
        };
        for event in events {
            snapshot.total += 1;
            *snapshot
                .by_reason
                .entry(event.reason.tag().to_owned())
                .or_insert(0) += 1;
            *snapshot
                .by_activity_level
                .entry(event.context.activity_level.clone())
                .or_insert(0) += 1;
            *snapshot
                .by_day_type
                .entry(event.context.day_type_key().to_owned())
                .or_insert(0) += 1;
        }
        snapshot
    }
}
