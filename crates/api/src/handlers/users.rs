//! Handlers for profile sync and the caller's own resources.
//!
//! Identity lives with the external provider; `POST /users/sync` is how a
//! session becomes a profile row. Everything else here reads the caller's
//! own data.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use queueup_core::error::CoreError;
use queueup_db::repositories::{OrgRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, CurrentUser};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /users/sync`. The role is never client-supplied; new
/// accounts always start as `customer`.
#[derive(Debug, Deserialize)]
pub struct SyncUserRequest {
    pub name: String,
    pub email: String,
}

/// POST /users/sync
///
/// Upsert the caller's profile from the identity provider's claims. On
/// first call this creates a `customer` account; later calls refresh name
/// and email but never touch the role.
pub async fn sync_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SyncUserRequest>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name must not be empty".into(),
        )));
    }
    if input.email.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email must not be empty".into(),
        )));
    }

    let user = UserRepo::upsert(&state.pool, &auth.subject, &input.name, &input.email).await?;

    tracing::info!(user_id = user.id, subject = %auth.subject, "User profile synced");

    Ok(Json(DataResponse { data: user }))
}

/// GET /users/me
///
/// The caller's synced profile.
pub async fn me(CurrentUser(user): CurrentUser) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse { data: user }))
}

/// GET /users/me/orgs
///
/// Orgs owned by the caller.
pub async fn my_orgs(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let orgs = OrgRepo::list_by_owner(&state.pool, user.id).await?;
    Ok(Json(DataResponse { data: orgs }))
}
