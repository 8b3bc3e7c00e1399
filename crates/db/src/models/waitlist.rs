//! Waitlist entity model.

use serde::Serialize;
use sqlx::FromRow;
use queueup_core::types::{DbId, Timestamp};

/// A row from the `waitlists` table. At most one exists per restaurant.
///
/// `next_position` is the monotonic join counter; it only ever grows, so
/// stored entry positions are join-time snapshots and become gappy as
/// parties leave the queue.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Waitlist {
    pub id: DbId,
    pub restaurant_id: DbId,
    pub is_open: bool,
    pub avg_wait_mins: i32,
    pub next_position: i32,
    pub created_at: Timestamp,
}
