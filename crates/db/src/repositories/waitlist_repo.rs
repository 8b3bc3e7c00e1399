//! Repository for the `waitlists` table.
//!
//! A restaurant has at most one waitlist (unique `restaurant_id`). The
//! join flow creates it lazily with `create_if_absent` and then takes the
//! row lock with `lock_by_restaurant`, so the open check, the position
//! counter bump, and the entry insert all happen under one lock.

use sqlx::PgExecutor;
use queueup_core::types::DbId;

use crate::models::waitlist::Waitlist;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, restaurant_id, is_open, avg_wait_mins, next_position, created_at";

/// Provides operations for the per-restaurant waitlist registry.
pub struct WaitlistRepo;

impl WaitlistRepo {
    /// Find a waitlist by its restaurant.
    pub async fn find_by_restaurant(
        executor: impl PgExecutor<'_>,
        restaurant_id: DbId,
    ) -> Result<Option<Waitlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM waitlists WHERE restaurant_id = $1");
        sqlx::query_as::<_, Waitlist>(&query)
            .bind(restaurant_id)
            .fetch_optional(executor)
            .await
    }

    /// Find a waitlist by internal id.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Waitlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM waitlists WHERE id = $1");
        sqlx::query_as::<_, Waitlist>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Create the restaurant's waitlist with defaults (`is_open`,
    /// `avg_wait_mins = 15`) if it does not exist yet. Safe under
    /// concurrent callers: the unique constraint makes this a no-op race.
    pub async fn create_if_absent(
        executor: impl PgExecutor<'_>,
        restaurant_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO waitlists (restaurant_id) VALUES ($1)
             ON CONFLICT (restaurant_id) DO NOTHING",
        )
        .bind(restaurant_id)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Fetch the restaurant's waitlist with `FOR UPDATE`, serializing
    /// concurrent joins against the same queue. Must run inside a
    /// transaction.
    pub async fn lock_by_restaurant(
        executor: impl PgExecutor<'_>,
        restaurant_id: DbId,
    ) -> Result<Option<Waitlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM waitlists WHERE restaurant_id = $1 FOR UPDATE");
        sqlx::query_as::<_, Waitlist>(&query)
            .bind(restaurant_id)
            .fetch_optional(executor)
            .await
    }

    /// Atomically advance the join counter, returning the position just
    /// claimed (1-based).
    pub async fn advance_position(
        executor: impl PgExecutor<'_>,
        waitlist_id: DbId,
    ) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE waitlists SET next_position = next_position + 1
             WHERE id = $1
             RETURNING next_position",
        )
        .bind(waitlist_id)
        .fetch_one(executor)
        .await
    }

    /// Set the open flag on a restaurant's waitlist. Returns `None` if the
    /// restaurant has no waitlist. Idempotent.
    pub async fn set_open(
        executor: impl PgExecutor<'_>,
        restaurant_id: DbId,
        is_open: bool,
    ) -> Result<Option<Waitlist>, sqlx::Error> {
        let query = format!(
            "UPDATE waitlists SET is_open = $2 WHERE restaurant_id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Waitlist>(&query)
            .bind(restaurant_id)
            .bind(is_open)
            .fetch_optional(executor)
            .await
    }
}
