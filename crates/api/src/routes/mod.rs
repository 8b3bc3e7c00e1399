pub mod admin;
pub mod health;
pub mod orgs;
pub mod restaurants;
pub mod users;
pub mod waitlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /restaurants                         list (public), create (owner/admin)
/// /restaurants/slug/{slug}             public slug lookup
/// /restaurants/{id}/photos             update photos (owner/admin)
/// /restaurants/{id}/waitlist           public queue status
/// /restaurants/{id}/waitlist/join      public join
/// /restaurants/{id}/waitlist/open      open queue (owner/admin)
/// /restaurants/{id}/waitlist/close     close queue (owner/admin)
/// /restaurants/{id}/events             audit log (owner/admin)
///
/// /waitlists/{id}/entries              waiting entries in join order
///
/// /queue/{share_token}                 guest view (token is the credential)
/// /queue/{share_token}/cancel          guest self-service cancel
///
/// /entries/{id}/page                   staff: page the party
/// /entries/{id}/seat                   staff: seat the party
/// /entries/{id}/no-show                staff: mark no-show
/// /entries/{id}/cancel                 staff: cancel
/// /entries/{id}/notes                  staff: replace notes
///
/// /users/sync                          upsert caller profile (auth)
/// /users/me                            caller profile (auth)
/// /users/me/orgs                       caller's orgs (auth)
///
/// /orgs                                create org (auth)
/// /orgs/{id}/restaurants               org's restaurants (owner/admin)
///
/// /admin/users                         list users (admin)
/// /admin/users/{id}/role               change role (admin)
/// /admin/orgs                          list orgs (admin)
/// /admin/restaurants                   list all restaurants (admin)
/// /admin/restaurants/{id}/status       activate/deactivate (admin)
/// /admin/bootstrap                     first-admin bootstrap (secret-gated)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/restaurants", restaurants::router())
        .nest("/waitlists", waitlist::waitlists_router())
        .nest("/queue", waitlist::queue_router())
        .nest("/entries", waitlist::entries_router())
        .nest("/users", users::router())
        .nest("/orgs", orgs::router())
        .nest("/admin", admin::router())
}
