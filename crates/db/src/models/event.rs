//! Audit event entity model.

use serde::Serialize;
use sqlx::FromRow;
use queueup_core::types::{DbId, Timestamp};

/// A row from the append-only `events` table.
///
/// `restaurant_id` is `NULL` only for platform-level events such as
/// `admin_bootstrap`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub restaurant_id: Option<DbId>,
    pub entry_id: Option<DbId>,
    pub event_type: String,
    pub ts: Timestamp,
    pub meta: serde_json::Value,
}
