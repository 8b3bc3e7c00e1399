//! Best-effort guest paging notifier.
//!
//! [`PagingNotifier`] subscribes to the [`EventBus`](crate::bus::EventBus)
//! and reacts to `entry_paged` events: if the restaurant has SMS enabled
//! and the entry carries a phone number, the outbound page is handed to
//! the delivery channel (logged here; actual carrier integration lives
//! outside this service). Failures are logged and never propagated — a
//! missed page must not fail the staff action that triggered it.

use tokio::sync::broadcast;
use queueup_db::repositories::{EntryRepo, RestaurantRepo, WaitlistRepo};
use queueup_db::DbPool;

use crate::bus::QueueEvent;

/// Background service that turns paging events into guest notifications.
pub struct PagingNotifier {
    pool: DbPool,
}

impl PagingNotifier {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run the notification loop.
    ///
    /// Exits when the channel is closed, i.e. when the
    /// [`EventBus`](crate::bus::EventBus) is dropped during shutdown.
    pub async fn run(self, mut receiver: broadcast::Receiver<QueueEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) if event.event_type == "entry_paged" => {
                    if let Err(e) = self.page_guest(&event).await {
                        tracing::warn!(
                            error = %e,
                            entry_id = ?event.entry_id,
                            "Failed to deliver paging notification"
                        );
                    }
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Paging notifier lagged, some pages were skipped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, paging notifier shutting down");
                    break;
                }
            }
        }
    }

    /// Resolve the entry's restaurant settings and emit the page.
    async fn page_guest(&self, event: &QueueEvent) -> Result<(), sqlx::Error> {
        let Some(entry_id) = event.entry_id else {
            return Ok(());
        };
        let Some(entry) = EntryRepo::find_by_id(&self.pool, entry_id).await? else {
            return Ok(());
        };
        let Some(waitlist) = WaitlistRepo::find_by_id(&self.pool, entry.waitlist_id).await? else {
            return Ok(());
        };
        let Some(restaurant) =
            RestaurantRepo::find_by_id(&self.pool, waitlist.restaurant_id).await?
        else {
            return Ok(());
        };

        match entry.phone.as_deref() {
            Some(phone) if restaurant.sms_enabled => {
                tracing::info!(
                    entry_id,
                    restaurant = %restaurant.name,
                    phone,
                    message = %restaurant.paging_message,
                    "Paging guest via SMS"
                );
            }
            _ => {
                tracing::debug!(
                    entry_id,
                    restaurant = %restaurant.name,
                    "Guest paged; no SMS channel available"
                );
            }
        }
        Ok(())
    }
}
