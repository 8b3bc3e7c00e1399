//! Handlers for org management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use queueup_core::error::CoreError;
use queueup_core::types::DbId;
use queueup_db::models::org::CreateOrg;
use queueup_db::models::user::User;
use queueup_db::repositories::{OrgRepo, RestaurantRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Plans accepted by `POST /orgs`, matching the `ck_orgs_plan` constraint.
const VALID_PLANS: &[&str] = &["basic", "pro", "premium"];

/// POST /orgs
///
/// Create an org owned by the caller.
pub async fn create_org(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(input): Json<CreateOrg>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Org name must not be empty".into(),
        )));
    }
    if let Some(ref plan) = input.plan {
        if !VALID_PLANS.contains(&plan.as_str()) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown plan: {plan}"
            ))));
        }
    }

    let org = OrgRepo::create(&state.pool, user.id, &input).await?;

    tracing::info!(org_id = org.id, owner_user_id = user.id, "Org created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: org })))
}

/// GET /orgs/{id}/restaurants
///
/// List an org's restaurants. Owner or admin only.
pub async fn list_org_restaurants(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(org_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let org = OrgRepo::find_by_id(&state.pool, org_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Org",
                id: org_id,
            })
        })?;

    ensure_org_authority(&user, org.owner_user_id)?;

    let restaurants = RestaurantRepo::list_by_org(&state.pool, org.id).await?;
    Ok(Json(DataResponse { data: restaurants }))
}

/// Reject callers who neither own the org nor hold the admin role.
pub fn ensure_org_authority(user: &User, owner_user_id: DbId) -> Result<(), AppError> {
    if user.role != queueup_core::roles::ROLE_ADMIN && user.id != owner_user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the org owner or an admin may do this".into(),
        )));
    }
    Ok(())
}
