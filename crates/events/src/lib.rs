//! Queue Up in-process event infrastructure.
//!
//! The audit log itself is written synchronously inside each mutation's
//! database transaction; this crate carries the *reactive* side:
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`QueueEvent`] — the canonical domain event envelope.
//! - [`PagingNotifier`] — background task that reacts to `entry_paged`
//!   events with a best-effort guest notification.

pub mod bus;
pub mod notify;

pub use bus::{EventBus, QueueEvent};
pub use notify::PagingNotifier;
