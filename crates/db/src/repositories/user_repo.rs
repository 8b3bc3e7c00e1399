//! Repository for the `users` table.

use sqlx::PgExecutor;
use queueup_core::types::DbId;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, external_id, name, email, role, created_at, updated_at";

/// Provides read/write operations for user profiles.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by the identity provider's subject id.
    pub async fn find_by_external_id(
        executor: impl PgExecutor<'_>,
        external_id: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE external_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(external_id)
            .fetch_optional(executor)
            .await
    }

    /// Find a user by internal id.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Insert a profile for `external_id`, or refresh name/email if one
    /// already exists. The role is never touched on conflict — only an
    /// admin may change roles.
    pub async fn upsert(
        executor: impl PgExecutor<'_>,
        external_id: &str,
        name: &str,
        email: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (external_id, name, email)
             VALUES ($1, $2, $3)
             ON CONFLICT (external_id)
             DO UPDATE SET name = EXCLUDED.name, email = EXCLUDED.email, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(external_id)
            .bind(name)
            .bind(email)
            .fetch_one(executor)
            .await
    }

    /// List all users, oldest first.
    pub async fn list(executor: impl PgExecutor<'_>) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at, id");
        sqlx::query_as::<_, User>(&query).fetch_all(executor).await
    }

    /// Set a user's role. Returns `None` if no such user exists.
    pub async fn set_role(
        executor: impl PgExecutor<'_>,
        id: DbId,
        role: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET role = $2, updated_at = NOW() WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(role)
            .fetch_optional(executor)
            .await
    }

    /// Whether any admin user exists. Gates the one-time bootstrap command.
    pub async fn admin_exists(executor: impl PgExecutor<'_>) -> Result<bool, sqlx::Error> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE role = 'admin')")
                .fetch_one(executor)
                .await?;
        Ok(exists)
    }
}
