//! User entity model.

use serde::Serialize;
use sqlx::FromRow;
use queueup_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// `external_id` is the stable subject identifier issued by the external
/// identity provider; it is the only link between a session and a profile.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub external_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
