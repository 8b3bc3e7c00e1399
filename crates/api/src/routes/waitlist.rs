//! Route definitions for waitlist entries, the guest share-token surface,
//! and the staff console.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::waitlist;
use crate::state::AppState;

/// Waitlist listing routes, nested under `/waitlists`.
///
/// ```text
/// GET /{id}/entries    list_entries (public, waiting only)
/// ```
pub fn waitlists_router() -> Router<AppState> {
    Router::new().route("/{id}/entries", get(waitlist::list_entries))
}

/// Guest share-token routes, nested under `/queue`.
///
/// ```text
/// GET  /{share_token}           guest_queue_view (token is the credential)
/// POST /{share_token}/cancel    guest_cancel
/// ```
pub fn queue_router() -> Router<AppState> {
    Router::new()
        .route("/{share_token}", get(waitlist::guest_queue_view))
        .route("/{share_token}/cancel", post(waitlist::guest_cancel))
}

/// Staff console routes, nested under `/entries`.
///
/// ```text
/// POST /{id}/page       page_entry
/// POST /{id}/seat       seat_entry
/// POST /{id}/no-show    no_show_entry
/// POST /{id}/cancel     cancel_entry
/// PUT  /{id}/notes      update_notes
/// ```
pub fn entries_router() -> Router<AppState> {
    Router::new()
        .route("/{id}/page", post(waitlist::page_entry))
        .route("/{id}/seat", post(waitlist::seat_entry))
        .route("/{id}/no-show", post(waitlist::no_show_entry))
        .route("/{id}/cancel", post(waitlist::cancel_entry))
        .route("/{id}/notes", put(waitlist::update_notes))
}
