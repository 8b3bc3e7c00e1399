//! Route definitions for the platform admin console.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin routes, nested under `/admin`. All require the admin role except
/// `/bootstrap`, which is gated by the deployment secret instead.
///
/// ```text
/// GET  /users                      list_users (admin)
/// PUT  /users/{id}/role            update_user_role (admin)
/// GET  /orgs                       list_orgs (admin)
/// GET  /restaurants                list_restaurants (admin, includes inactive)
/// PUT  /restaurants/{id}/status    update_restaurant_status (admin)
/// POST /bootstrap                  bootstrap_admin (secret-gated)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}/role", put(admin::update_user_role))
        .route("/orgs", get(admin::list_orgs))
        .route("/restaurants", get(admin::list_restaurants))
        .route("/restaurants/{id}/status", put(admin::update_restaurant_status))
        .route("/bootstrap", post(admin::bootstrap_admin))
}
