//! Repository for the `restaurants` table.

use sqlx::PgExecutor;
use queueup_core::types::DbId;

use crate::models::restaurant::{CreateRestaurant, Restaurant};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, org_id, name, slug, address, lat, lng, tags, walk_in_only, \
     open_hours, photos, sms_enabled, buffer_mins, paging_message, is_active, \
     created_at, updated_at";

/// Provides CRUD operations for restaurants.
pub struct RestaurantRepo;

impl RestaurantRepo {
    /// Insert a new restaurant, returning the created row. Active by default.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateRestaurant,
    ) -> Result<Restaurant, sqlx::Error> {
        let open_hours = serde_json::to_value(&input.open_hours)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let query = format!(
            "INSERT INTO restaurants
                (org_id, name, slug, address, lat, lng, tags, walk_in_only,
                 open_hours, photos, sms_enabled, buffer_mins, paging_message)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(input.org_id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.address)
            .bind(input.lat)
            .bind(input.lng)
            .bind(&input.tags)
            .bind(input.walk_in_only)
            .bind(open_hours)
            .bind(&input.photos)
            .bind(input.settings.sms_enabled)
            .bind(input.settings.buffer_mins)
            .bind(&input.settings.paging_message)
            .fetch_one(executor)
            .await
    }

    /// Find a restaurant by id, regardless of active flag (admin/owner paths).
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find an active restaurant by id (public paths).
    pub async fn find_active_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE id = $1 AND is_active");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find an active restaurant by slug (public paths).
    pub async fn find_active_by_slug(
        executor: impl PgExecutor<'_>,
        slug: &str,
    ) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE slug = $1 AND is_active");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(slug)
            .fetch_optional(executor)
            .await
    }

    /// List active restaurants for public consumption.
    pub async fn list_active(
        executor: impl PgExecutor<'_>,
    ) -> Result<Vec<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE is_active ORDER BY name");
        sqlx::query_as::<_, Restaurant>(&query)
            .fetch_all(executor)
            .await
    }

    /// List all restaurants including inactive ones (admin view).
    pub async fn list_all(executor: impl PgExecutor<'_>) -> Result<Vec<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants ORDER BY name");
        sqlx::query_as::<_, Restaurant>(&query)
            .fetch_all(executor)
            .await
    }

    /// List restaurants belonging to the given org.
    pub async fn list_by_org(
        executor: impl PgExecutor<'_>,
        org_id: DbId,
    ) -> Result<Vec<Restaurant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM restaurants WHERE org_id = $1 ORDER BY name");
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(org_id)
            .fetch_all(executor)
            .await
    }

    /// Set the active flag. Returns `None` if no such restaurant exists.
    pub async fn set_active(
        executor: impl PgExecutor<'_>,
        id: DbId,
        is_active: bool,
    ) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!(
            "UPDATE restaurants SET is_active = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .bind(is_active)
            .fetch_optional(executor)
            .await
    }

    /// Replace the photo list. Returns `None` if no such restaurant exists.
    pub async fn set_photos(
        executor: impl PgExecutor<'_>,
        id: DbId,
        photos: &[String],
    ) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!(
            "UPDATE restaurants SET photos = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .bind(photos)
            .fetch_optional(executor)
            .await
    }
}
