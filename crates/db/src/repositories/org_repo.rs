//! Repository for the `orgs` table.

use sqlx::PgExecutor;
use queueup_core::types::DbId;

use crate::models::org::{CreateOrg, Org};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, owner_user_id, plan, created_at";

/// Provides CRUD operations for orgs.
pub struct OrgRepo;

impl OrgRepo {
    /// Insert a new org owned by `owner_user_id`, returning the created row.
    ///
    /// If `plan` is `None` in the input, defaults to `basic`.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        owner_user_id: DbId,
        input: &CreateOrg,
    ) -> Result<Org, sqlx::Error> {
        let query = format!(
            "INSERT INTO orgs (name, owner_user_id, plan)
             VALUES ($1, $2, COALESCE($3, 'basic'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Org>(&query)
            .bind(&input.name)
            .bind(owner_user_id)
            .bind(&input.plan)
            .fetch_one(executor)
            .await
    }

    /// Find an org by its internal id.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Org>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orgs WHERE id = $1");
        sqlx::query_as::<_, Org>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List orgs owned by the given user.
    pub async fn list_by_owner(
        executor: impl PgExecutor<'_>,
        owner_user_id: DbId,
    ) -> Result<Vec<Org>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM orgs WHERE owner_user_id = $1 ORDER BY created_at, id");
        sqlx::query_as::<_, Org>(&query)
            .bind(owner_user_id)
            .fetch_all(executor)
            .await
    }

    /// List all orgs (admin view).
    pub async fn list(executor: impl PgExecutor<'_>) -> Result<Vec<Org>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orgs ORDER BY created_at, id");
        sqlx::query_as::<_, Org>(&query).fetch_all(executor).await
    }
}
