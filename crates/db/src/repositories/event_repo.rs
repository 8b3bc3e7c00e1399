//! Repository for the append-only `events` table.
//!
//! Events are written in the same transaction as the state change they
//! record and are never updated or deleted.

use sqlx::PgExecutor;
use queueup_core::types::DbId;

use crate::models::event::Event;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, restaurant_id, entry_id, event_type, ts, meta";

/// Provides write and listing operations for audit events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event row, returning the generated id.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        restaurant_id: Option<DbId>,
        entry_id: Option<DbId>,
        event_type: &str,
        meta: &serde_json::Value,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO events (restaurant_id, entry_id, event_type, meta)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(restaurant_id)
        .bind(entry_id)
        .bind(event_type)
        .bind(meta)
        .fetch_one(executor)
        .await
    }

    /// List a restaurant's events newest-first, capped at `limit`.
    pub async fn list_by_restaurant(
        executor: impl PgExecutor<'_>,
        restaurant_id: DbId,
        limit: i64,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE restaurant_id = $1
             ORDER BY ts DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(restaurant_id)
            .bind(limit)
            .fetch_all(executor)
            .await
    }

    /// Count events recorded for one entry. Used by tests and analytics.
    pub async fn count_by_entry(
        executor: impl PgExecutor<'_>,
        entry_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM events WHERE entry_id = $1")
            .bind(entry_id)
            .fetch_one(executor)
            .await
    }
}
