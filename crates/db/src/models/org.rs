//! Org entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use queueup_core::types::{DbId, Timestamp};

/// A row from the `orgs` table. Every org has exactly one owning user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Org {
    pub id: DbId,
    pub name: String,
    pub owner_user_id: DbId,
    pub plan: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new org.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrg {
    pub name: String,
    /// Defaults to `basic` if omitted.
    pub plan: Option<String>,
}
