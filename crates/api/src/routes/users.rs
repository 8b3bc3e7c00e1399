//! Route definitions for profile sync and the caller's own resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes, nested under `/users`.
///
/// ```text
/// POST /sync       sync_user (auth)
/// GET  /me         me (auth)
/// GET  /me/orgs    my_orgs (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sync", post(users::sync_user))
        .route("/me", get(users::me))
        .route("/me/orgs", get(users::my_orgs))
}
