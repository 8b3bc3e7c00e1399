//! Repository for the `waitlist_entries` and `entry_updates` tables.

use sqlx::PgExecutor;
use queueup_core::types::DbId;

use crate::models::entry::{EntryUpdate, NewEntry, WaitlistEntry};

/// Column list for `waitlist_entries` queries.
const ENTRY_COLUMNS: &str = "id, waitlist_id, name, phone, party_size, join_source, joined_at, \
     status, quoted_mins, eta_mins, position, share_token, notes";

/// Column list for `entry_updates` queries.
const UPDATE_COLUMNS: &str = "id, entry_id, ts, update_type, meta";

/// Provides operations for waitlist entries and their update logs.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert a new entry with status `waiting`, returning the created row.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        input: &NewEntry,
    ) -> Result<WaitlistEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO waitlist_entries
                (waitlist_id, name, phone, party_size, join_source,
                 quoted_mins, eta_mins, position, share_token)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {ENTRY_COLUMNS}"
        );
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .bind(input.waitlist_id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(input.party_size)
            .bind(input.join_source)
            .bind(input.quoted_mins)
            .bind(input.eta_mins)
            .bind(input.position)
            .bind(&input.share_token)
            .fetch_one(executor)
            .await
    }

    /// Find an entry by internal id.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<WaitlistEntry>, sqlx::Error> {
        let query = format!("SELECT {ENTRY_COLUMNS} FROM waitlist_entries WHERE id = $1");
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Fetch an entry with `FOR UPDATE`, serializing concurrent status
    /// transitions. Must run inside a transaction.
    pub async fn lock_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<WaitlistEntry>, sqlx::Error> {
        let query =
            format!("SELECT {ENTRY_COLUMNS} FROM waitlist_entries WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find an entry by its public share token.
    pub async fn find_by_share_token(
        executor: impl PgExecutor<'_>,
        share_token: &str,
    ) -> Result<Option<WaitlistEntry>, sqlx::Error> {
        let query = format!("SELECT {ENTRY_COLUMNS} FROM waitlist_entries WHERE share_token = $1");
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .bind(share_token)
            .fetch_optional(executor)
            .await
    }

    /// List an entire waitlist's `waiting` entries in join order.
    ///
    /// Stored positions are join-time snapshots and may be gappy; rank in
    /// this ordering is the party's current place in the queue.
    pub async fn list_waiting(
        executor: impl PgExecutor<'_>,
        waitlist_id: DbId,
    ) -> Result<Vec<WaitlistEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {ENTRY_COLUMNS} FROM waitlist_entries
             WHERE waitlist_id = $1 AND status = 'waiting'
             ORDER BY joined_at, id"
        );
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .bind(waitlist_id)
            .fetch_all(executor)
            .await
    }

    /// Patch an entry's status.
    pub async fn set_status(
        executor: impl PgExecutor<'_>,
        id: DbId,
        status: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE waitlist_entries SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// Replace the staff notes. Returns `None` if no such entry exists.
    pub async fn set_notes(
        executor: impl PgExecutor<'_>,
        id: DbId,
        notes: Option<&str>,
    ) -> Result<Option<WaitlistEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE waitlist_entries SET notes = $2 WHERE id = $1 RETURNING {ENTRY_COLUMNS}"
        );
        sqlx::query_as::<_, WaitlistEntry>(&query)
            .bind(id)
            .bind(notes)
            .fetch_optional(executor)
            .await
    }

    /// Append one record to the entry's update log.
    pub async fn append_update(
        executor: impl PgExecutor<'_>,
        entry_id: DbId,
        update_type: &str,
        meta: &serde_json::Value,
    ) -> Result<EntryUpdate, sqlx::Error> {
        let query = format!(
            "INSERT INTO entry_updates (entry_id, update_type, meta)
             VALUES ($1, $2, $3)
             RETURNING {UPDATE_COLUMNS}"
        );
        sqlx::query_as::<_, EntryUpdate>(&query)
            .bind(entry_id)
            .bind(update_type)
            .bind(meta)
            .fetch_one(executor)
            .await
    }

    /// List an entry's update log in insertion order.
    pub async fn list_updates(
        executor: impl PgExecutor<'_>,
        entry_id: DbId,
    ) -> Result<Vec<EntryUpdate>, sqlx::Error> {
        let query =
            format!("SELECT {UPDATE_COLUMNS} FROM entry_updates WHERE entry_id = $1 ORDER BY id");
        sqlx::query_as::<_, EntryUpdate>(&query)
            .bind(entry_id)
            .fetch_all(executor)
            .await
    }
}
