// ABOUTME: In-memory rejection store for tests and single-process deployments
// ABOUTME: Holds events in a DashMap keyed by event id, shared by clones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RejectionEvent, RejectionStore};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use fitplan_core::errors::AppResult;
use std::sync::Arc;
use uuid::Uuid;

/// Rejection store backed by a shared concurrent map
///
/// Events are keyed by id, so persisting the same event twice stores it once.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRejectionStore {
    events: Arc<DashMap<Uuid, RejectionEvent>>,
}

impl InMemoryRejectionStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RejectionStore for InMemoryRejectionStore {
    async fn persist(&self, event: &RejectionEvent) -> AppResult<()> {
        self.events.insert(event.id, event.clone());
        Ok(())
    }

    async fn load_since(&self, since: Option<DateTime<Utc>>) -> AppResult<Vec<RejectionEvent>> {
        let mut loaded: Vec<RejectionEvent> = self
            .events
            .iter()
            .filter(|entry| since.is_none_or(|s| entry.recorded_at >= s))
            .map(|entry| entry.value().clone())
            .collect();
        loaded.sort_by_key(|e| e.recorded_at);
        Ok(loaded)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.events.len() as u64)
    }
}
