//! Route definitions for restaurant discovery and owner-side management.
//!
//! Public discovery and the waitlist surface share the `/restaurants`
//! prefix; the waitlist handlers live in `handlers::waitlist`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{restaurants, waitlist};
use crate::state::AppState;

/// Restaurant routes, nested under `/restaurants`.
///
/// ```text
/// GET  /                       list_restaurants (public, active only)
/// POST /                       create_restaurant (org owner or admin)
/// GET  /slug/{slug}            get_restaurant_by_slug (public)
/// PUT  /{id}/photos            update_photos (org owner or admin)
/// GET  /{id}/waitlist          waitlist_status (public)
/// POST /{id}/waitlist/join     join_waitlist (public)
/// POST /{id}/waitlist/open     open_waitlist (org owner or admin)
/// POST /{id}/waitlist/close    close_waitlist (org owner or admin)
/// GET  /{id}/events            list_restaurant_events (org owner or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(restaurants::list_restaurants).post(restaurants::create_restaurant),
        )
        .route("/slug/{slug}", get(restaurants::get_restaurant_by_slug))
        .route("/{id}/photos", put(restaurants::update_photos))
        .route("/{id}/waitlist", get(waitlist::waitlist_status))
        .route("/{id}/waitlist/join", post(waitlist::join_waitlist))
        .route("/{id}/waitlist/open", post(restaurants::open_waitlist))
        .route("/{id}/waitlist/close", post(restaurants::close_waitlist))
        .route("/{id}/events", get(restaurants::list_restaurant_events))
}
