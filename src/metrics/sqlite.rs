// ABOUTME: SQLite rejection store for durable rejection metrics
// ABOUTME: Creates the plan_rejections table on connect and stores context as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RejectionEvent, RejectionStore};
use chrono::{DateTime, SecondsFormat, Utc};
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{RejectionContext, RejectionReason};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

/// Rejection store backed by a SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteRejectionStore {
    pool: SqlitePool,
}

impl SqliteRejectionStore {
    /// Connect to `database_url` and create the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        // Create the database file when it does not exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains('?')
            && !database_url.contains(":memory:")
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open rejection store: {e}")))?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool and create the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the migration fails
    pub async fn from_pool(pool: SqlitePool) -> AppResult<Self> {
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS plan_rejections (
                id TEXT PRIMARY KEY,
                reason TEXT NOT NULL,
                activity_level TEXT NOT NULL,
                day_type TEXT NOT NULL,
                exercise_count INTEGER NOT NULL,
                context TEXT NOT NULL,
                recorded_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create plan_rejections table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_plan_rejections_recorded_at \
             ON plan_rejections(recorded_at)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create plan_rejections index: {e}")))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RejectionStore for SqliteRejectionStore {
    async fn persist(&self, event: &RejectionEvent) -> AppResult<()> {
        let context_json = serde_json::to_string(&event.context)?;
        sqlx::query(
            r"
            INSERT INTO plan_rejections (
                id, reason, activity_level, day_type, exercise_count, context, recorded_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(event.id.to_string())
        .bind(event.reason.tag())
        .bind(&event.context.activity_level)
        .bind(event.context.day_type_key())
        .bind(i64::try_from(event.context.exercise_count).unwrap_or(i64::MAX))
        .bind(&context_json)
        .bind(timestamp(event.recorded_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to store plan rejection: {e}")))?;
        Ok(())
    }

    async fn load_since(&self, since: Option<DateTime<Utc>>) -> AppResult<Vec<RejectionEvent>> {
        let rows = match since {
            Some(since) => {
                sqlx::query(
                    r"
                    SELECT id, reason, context, recorded_at FROM plan_rejections
                    WHERE recorded_at >= $1
                    ORDER BY recorded_at
                    ",
                )
                .bind(timestamp(since))
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    "SELECT id, reason, context, recorded_at FROM plan_rejections \
                     ORDER BY recorded_at",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to load plan rejections: {e}")))?;

        rows.iter().map(row_to_event).collect()
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM plan_rejections")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count plan rejections: {e}")))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

/// Fixed-width UTC timestamp so stored values sort chronologically as text
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Convert a database row to a `RejectionEvent`
fn row_to_event(row: &SqliteRow) -> AppResult<RejectionEvent> {
    let column = |name: &str| -> AppResult<String> {
        row.try_get(name)
            .map_err(|e| AppError::database(format!("Missing column {name}: {e}")))
    };

    let id_str = column("id")?;
    let reason_str = column("reason")?;
    let context_json = column("context")?;
    let recorded_at_str = column("recorded_at")?;

    let reason = RejectionReason::from_tag(&reason_str).ok_or_else(|| {
        AppError::invalid_format(format!("Unknown rejection reason: {reason_str}"))
    })?;
    let context: RejectionContext = serde_json::from_str(&context_json)?;

    Ok(RejectionEvent {
        id: Uuid::parse_str(&id_str)
            .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?,
        reason,
        context,
        recorded_at: DateTime::parse_from_rfc3339(&recorded_at_str)
            .map_err(|e| AppError::internal(format!("Invalid timestamp: {e}")))?
            .with_timezone(&Utc),
    })
}
