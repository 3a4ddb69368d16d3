// ABOUTME: Rejection metrics configuration
// ABOUTME: In-memory event retention and durable persistence toggle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Rejection metrics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Rejection events kept in memory for time-window queries
    pub max_retained_events: usize,
    /// Forward rejections to the injected store
    pub persistence_enabled: bool,
    /// SQLite URL for the durable store, e.g. `sqlite://rejections.db`
    pub database_url: Option<String>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            max_retained_events: 10_000,
            persistence_enabled: true,
            database_url: None,
        }
    }
}
