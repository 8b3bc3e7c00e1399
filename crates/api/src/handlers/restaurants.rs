//! Handlers for restaurant discovery and owner-side management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use queueup_core::error::CoreError;
use queueup_core::types::DbId;
use queueup_db::models::restaurant::{CreateRestaurant, Restaurant};
use queueup_db::models::user::User;
use queueup_db::models::waitlist::Waitlist;
use queueup_db::repositories::{EventRepo, OrgRepo, RestaurantRepo, WaitlistRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::orgs::ensure_org_authority;
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
   Public discovery
   -------------------------------------------------------------------------- */

/// GET /restaurants
///
/// List active restaurants.
pub async fn list_restaurants(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let restaurants = RestaurantRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: restaurants }))
}

/// GET /restaurants/slug/{slug}
///
/// Look up an active restaurant by slug. Inactive restaurants 404.
pub async fn get_restaurant_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let restaurant = RestaurantRepo::find_active_by_slug(&state.pool, &slug)
        .await?
        .ok_or(CoreError::NotFoundNamed {
            entity: "Restaurant",
            key: slug,
        })?;

    Ok(Json(DataResponse { data: restaurant }))
}

/* --------------------------------------------------------------------------
   Owner-side management
   -------------------------------------------------------------------------- */

/// POST /restaurants
///
/// Create a restaurant under an org the caller owns (or as admin).
pub async fn create_restaurant(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Json(input): Json<CreateRestaurant>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Restaurant name must not be empty".into(),
        )));
    }
    if input.slug.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Slug must not be empty".into(),
        )));
    }

    let org = OrgRepo::find_by_id(&state.pool, input.org_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Org",
                id: input.org_id,
            })
        })?;

    ensure_org_authority(&user, org.owner_user_id)?;

    let restaurant = RestaurantRepo::create(&state.pool, &input).await?;

    tracing::info!(
        restaurant_id = restaurant.id,
        org_id = org.id,
        slug = %restaurant.slug,
        "Restaurant created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: restaurant })))
}

/// Body for `PUT /restaurants/{id}/photos`.
#[derive(Debug, Deserialize)]
pub struct UpdatePhotosRequest {
    pub photos: Vec<String>,
}

/// PUT /restaurants/{id}/photos
///
/// Replace the photo list. Org owner or admin only.
pub async fn update_photos(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(restaurant_id): Path<DbId>,
    Json(input): Json<UpdatePhotosRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_restaurant_authority(&state, &user, restaurant_id).await?;

    let restaurant = RestaurantRepo::set_photos(&state.pool, restaurant_id, &input.photos)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Restaurant",
                id: restaurant_id,
            })
        })?;

    Ok(Json(DataResponse { data: restaurant }))
}

/// POST /restaurants/{id}/waitlist/open
///
/// Open the restaurant's waitlist, creating it on first use. Idempotent.
pub async fn open_waitlist(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(restaurant_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_waitlist_open(&state, &user, restaurant_id, true).await
}

/// POST /restaurants/{id}/waitlist/close
///
/// Close the restaurant's waitlist. Existing entries are untouched.
pub async fn close_waitlist(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(restaurant_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_waitlist_open(&state, &user, restaurant_id, false).await
}

async fn set_waitlist_open(
    state: &AppState,
    user: &User,
    restaurant_id: DbId,
    is_open: bool,
) -> AppResult<Json<DataResponse<Waitlist>>> {
    ensure_restaurant_authority(state, user, restaurant_id).await?;

    WaitlistRepo::create_if_absent(&state.pool, restaurant_id).await?;
    let waitlist = WaitlistRepo::set_open(&state.pool, restaurant_id, is_open)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("Waitlist missing for restaurant {restaurant_id}"))
        })?;

    tracing::info!(restaurant_id, is_open, "Waitlist open flag changed");

    Ok(Json(DataResponse { data: waitlist }))
}

/// Query parameters for the event listing.
#[derive(Debug, Deserialize)]
pub struct EventListParams {
    pub limit: Option<i64>,
}

/// Default and maximum page sizes for the event listing.
const DEFAULT_EVENT_LIMIT: i64 = 100;
const MAX_EVENT_LIMIT: i64 = 500;

/// GET /restaurants/{id}/events?limit=
///
/// A restaurant's audit event log, newest first. Org owner or admin only.
pub async fn list_restaurant_events(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(restaurant_id): Path<DbId>,
    Query(params): Query<EventListParams>,
) -> AppResult<impl IntoResponse> {
    ensure_restaurant_authority(&state, &user, restaurant_id).await?;

    let limit = params
        .limit
        .unwrap_or(DEFAULT_EVENT_LIMIT)
        .clamp(1, MAX_EVENT_LIMIT);

    let events = EventRepo::list_by_restaurant(&state.pool, restaurant_id, limit).await?;
    Ok(Json(DataResponse { data: events }))
}

/* --------------------------------------------------------------------------
   Shared authority check
   -------------------------------------------------------------------------- */

/// Load a restaurant and reject callers who neither own its org nor hold
/// the admin role. Returns the restaurant for handlers that need it.
pub async fn ensure_restaurant_authority(
    state: &AppState,
    user: &User,
    restaurant_id: DbId,
) -> Result<Restaurant, AppError> {
    let restaurant = RestaurantRepo::find_by_id(&state.pool, restaurant_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Restaurant",
                id: restaurant_id,
            })
        })?;

    let org = OrgRepo::find_by_id(&state.pool, restaurant.org_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "Restaurant {restaurant_id} references missing org {}",
                restaurant.org_id
            ))
        })?;

    ensure_org_authority(user, org.owner_user_id)?;

    Ok(restaurant)
}
