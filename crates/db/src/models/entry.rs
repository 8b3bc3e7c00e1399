//! Waitlist entry entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use queueup_core::types::{DbId, Timestamp};

/// A row from the `waitlist_entries` table.
///
/// `position` is assigned once at join time and never renumbered; display
/// rank must be derived from the order of the remaining waiting entries.
/// `quoted_mins` is frozen at join; `eta_mins` is computed identically and
/// not revised afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WaitlistEntry {
    pub id: DbId,
    pub waitlist_id: DbId,
    pub name: String,
    pub phone: Option<String>,
    pub party_size: i32,
    pub join_source: String,
    pub joined_at: Timestamp,
    pub status: String,
    pub quoted_mins: i32,
    pub eta_mins: i32,
    pub position: i32,
    pub share_token: String,
    pub notes: Option<String>,
}

/// A row from the append-only `entry_updates` log.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EntryUpdate {
    pub id: DbId,
    pub entry_id: DbId,
    pub ts: Timestamp,
    pub update_type: String,
    pub meta: serde_json::Value,
}

/// Insert DTO for a new entry. Everything here is computed by the join
/// flow; nothing comes straight from the client except name, phone, and
/// party size.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub waitlist_id: DbId,
    pub name: String,
    pub phone: Option<String>,
    pub party_size: i32,
    pub join_source: &'static str,
    pub quoted_mins: i32,
    pub eta_mins: i32,
    pub position: i32,
    pub share_token: String,
}
