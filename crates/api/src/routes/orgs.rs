//! Route definitions for org management.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::orgs;
use crate::state::AppState;

/// Org routes, nested under `/orgs`.
///
/// ```text
/// POST /                    create_org (auth)
/// GET  /{id}/restaurants    list_org_restaurants (owner or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(orgs::create_org))
        .route("/{id}/restaurants", get(orgs::list_org_restaurants))
}
