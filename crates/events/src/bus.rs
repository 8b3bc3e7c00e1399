//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the central publish/subscribe hub for [`QueueEvent`]s.
//! It is designed to be shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use queueup_core::types::DbId;

// ---------------------------------------------------------------------------
// QueueEvent
// ---------------------------------------------------------------------------

/// A domain event that occurred on the platform.
///
/// Constructed via [`QueueEvent::new`] and enriched with the builder
/// methods [`with_restaurant`](QueueEvent::with_restaurant),
/// [`with_entry`](QueueEvent::with_entry), and
/// [`with_payload`](QueueEvent::with_payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueEvent {
    /// Event name matching the `events.event_type` vocabulary,
    /// e.g. `"entry_paged"`.
    pub event_type: String,

    /// The restaurant the event belongs to, when there is one.
    pub restaurant_id: Option<DbId>,

    /// The waitlist entry involved, when there is one.
    pub entry_id: Option<DbId>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl QueueEvent {
    /// Create a new event with only the required `event_type`.
    ///
    /// All optional fields default to `None` / empty object.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            restaurant_id: None,
            entry_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Attach the restaurant the event belongs to.
    pub fn with_restaurant(mut self, restaurant_id: DbId) -> Self {
        self.restaurant_id = Some(restaurant_id);
        self
    }

    /// Attach the waitlist entry involved.
    pub fn with_entry(mut self, entry_id: DbId) -> Self {
        self.entry_id = Some(entry_id);
        self
    }

    /// Set the JSON payload for the event.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`QueueEvent`].
pub struct EventBus {
    sender: broadcast::Sender<QueueEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// the durable audit row was already written by the mutation itself.
    pub fn publish(&self, event: QueueEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<QueueEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
