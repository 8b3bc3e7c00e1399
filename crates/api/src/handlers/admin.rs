//! Handlers for the platform admin console and the one-time first-admin
//! bootstrap.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use queueup_core::error::CoreError;
use queueup_core::roles::{is_valid_role, ROLE_ADMIN};
use queueup_core::types::DbId;
use queueup_db::repositories::{EventRepo, OrgRepo, RestaurantRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
   Admin console
   -------------------------------------------------------------------------- */

/// GET /admin/users
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// Body for `PUT /admin/users/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

/// PUT /admin/users/{id}/role
///
/// Change a user's role to any of the known roles.
pub async fn update_user_role(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateRoleRequest>,
) -> AppResult<impl IntoResponse> {
    if !is_valid_role(&input.role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown role: {}",
            input.role
        ))));
    }

    let user = UserRepo::set_role(&state.pool, user_id, &input.role)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: user_id,
            })
        })?;

    tracing::info!(
        admin_id = admin.id,
        user_id = user.id,
        role = %user.role,
        "User role updated"
    );

    Ok(Json(DataResponse { data: user }))
}

/// GET /admin/orgs
pub async fn list_orgs(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let orgs = OrgRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: orgs }))
}

/// GET /admin/restaurants
///
/// All restaurants including inactive ones.
pub async fn list_restaurants(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let restaurants = RestaurantRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: restaurants }))
}

/// Body for `PUT /admin/restaurants/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateRestaurantStatusRequest {
    pub is_active: bool,
}

/// PUT /admin/restaurants/{id}/status
///
/// Activate or deactivate a restaurant. Deactivation hides it from all
/// public surfaces without deleting anything.
pub async fn update_restaurant_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(restaurant_id): Path<DbId>,
    Json(input): Json<UpdateRestaurantStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let restaurant = RestaurantRepo::set_active(&state.pool, restaurant_id, input.is_active)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Restaurant",
                id: restaurant_id,
            })
        })?;

    tracing::info!(
        admin_id = admin.id,
        restaurant_id = restaurant.id,
        is_active = restaurant.is_active,
        "Restaurant status updated"
    );

    Ok(Json(DataResponse { data: restaurant }))
}

/* --------------------------------------------------------------------------
   First-admin bootstrap
   -------------------------------------------------------------------------- */

/// Body for `POST /admin/bootstrap`.
#[derive(Debug, Deserialize)]
pub struct BootstrapRequest {
    pub secret: String,
}

/// POST /admin/bootstrap
///
/// Promote the caller to admin. Succeeds only when the deployment has
/// `ADMIN_BOOTSTRAP_SECRET` configured, the supplied secret matches, and
/// no admin exists yet. After the first success this endpoint is dead;
/// further role changes go through `PUT /admin/users/{id}/role`.
pub async fn bootstrap_admin(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(input): Json<BootstrapRequest>,
) -> AppResult<impl IntoResponse> {
    let expected = state.config.admin_bootstrap_secret.as_deref().ok_or_else(|| {
        AppError::Core(CoreError::Forbidden(
            "Admin bootstrap is not enabled on this deployment".into(),
        ))
    })?;

    if input.secret != expected {
        tracing::warn!(user_id = user.id, "Admin bootstrap attempted with wrong secret");
        return Err(AppError::Core(CoreError::Forbidden(
            "Invalid bootstrap secret".into(),
        )));
    }

    let mut tx = state.pool.begin().await?;

    if UserRepo::admin_exists(&mut *tx).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "An admin already exists".into(),
        )));
    }

    let promoted = UserRepo::set_role(&mut *tx, user.id, ROLE_ADMIN)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("User {} vanished during bootstrap", user.id))
        })?;

    EventRepo::insert(
        &mut *tx,
        None,
        None,
        "admin_bootstrap",
        &json!({ "user_id": promoted.id }),
    )
    .await?;

    tx.commit().await?;

    tracing::info!(user_id = promoted.id, "First admin bootstrapped");

    Ok(Json(DataResponse { data: promoted }))
}
