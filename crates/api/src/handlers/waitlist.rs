//! Handlers for the waitlist itself: joining, guest status, and the staff
//! console's lifecycle actions.
//!
//! Every mutation runs in one transaction so the status change, the entry's
//! update log, and the audit event land together or not at all. The join
//! flow additionally holds the waitlist row lock while it checks the open
//! flag and claims a position, which serializes concurrent joins.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use queueup_core::entry::{validate_transition, EntryStatus, JoinSource};
use queueup_core::error::CoreError;
use queueup_core::eta::{estimate_wait_mins, format_wait_mins, DEFAULT_AVG_WAIT_MINS};
use queueup_core::token::generate_share_token;
use queueup_core::types::DbId;
use queueup_db::models::entry::{EntryUpdate, NewEntry, WaitlistEntry};
use queueup_db::repositories::{EntryRepo, EventRepo, RestaurantRepo, WaitlistRepo};
use queueup_events::QueueEvent;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
   Public waitlist views
   -------------------------------------------------------------------------- */

/// Response for `GET /restaurants/{id}/waitlist`.
#[derive(Debug, Serialize)]
pub struct WaitlistStatus {
    pub waitlist_id: Option<DbId>,
    pub is_open: bool,
    pub waiting_count: usize,
    pub avg_wait_mins: i32,
}

/// GET /restaurants/{id}/waitlist
///
/// Public queue status for an active restaurant. A restaurant that has
/// never opened its waitlist reads as closed and empty.
pub async fn waitlist_status(
    State(state): State<AppState>,
    Path(restaurant_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let restaurant = RestaurantRepo::find_active_by_id(&state.pool, restaurant_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Restaurant",
                id: restaurant_id,
            })
        })?;

    let status = match WaitlistRepo::find_by_restaurant(&state.pool, restaurant.id).await? {
        Some(waitlist) => {
            let waiting = EntryRepo::list_waiting(&state.pool, waitlist.id).await?;
            WaitlistStatus {
                waitlist_id: Some(waitlist.id),
                is_open: waitlist.is_open,
                waiting_count: waiting.len(),
                avg_wait_mins: waitlist.avg_wait_mins,
            }
        }
        None => WaitlistStatus {
            waitlist_id: None,
            is_open: false,
            waiting_count: 0,
            avg_wait_mins: DEFAULT_AVG_WAIT_MINS,
        },
    };

    Ok(Json(DataResponse { data: status }))
}

/// GET /waitlists/{id}/entries
///
/// The waiting entries of a waitlist in join order. Terminal and paged
/// entries that have resolved are excluded; paged entries remain until
/// they resolve.
pub async fn list_entries(
    State(state): State<AppState>,
    Path(waitlist_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let waitlist = WaitlistRepo::find_by_id(&state.pool, waitlist_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Waitlist",
                id: waitlist_id,
            })
        })?;

    let entries = EntryRepo::list_waiting(&state.pool, waitlist.id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/* --------------------------------------------------------------------------
   Join
   -------------------------------------------------------------------------- */

/// Body for `POST /restaurants/{id}/waitlist/join`.
#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub name: String,
    pub phone: Option<String>,
    pub party_size: i32,
    pub source: JoinSource,
}

/// Response for a successful join.
#[derive(Debug, Serialize)]
pub struct JoinResponse {
    pub entry_id: DbId,
    pub share_token: String,
    pub position: i32,
    pub quoted_mins: i32,
}

/// POST /restaurants/{id}/waitlist/join
///
/// Add a party to the queue. The open check, position claim, entry insert,
/// update log, and audit event all run under the waitlist row lock.
pub async fn join_waitlist(
    State(state): State<AppState>,
    Path(restaurant_id): Path<DbId>,
    Json(input): Json<JoinRequest>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name must not be empty".into(),
        )));
    }
    if input.party_size < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "Party size must be at least 1".into(),
        )));
    }

    let restaurant = RestaurantRepo::find_active_by_id(&state.pool, restaurant_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Restaurant",
                id: restaurant_id,
            })
        })?;

    let mut tx = state.pool.begin().await?;

    WaitlistRepo::create_if_absent(&mut *tx, restaurant.id).await?;
    let waitlist = WaitlistRepo::lock_by_restaurant(&mut *tx, restaurant.id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("Waitlist missing for restaurant {restaurant_id}"))
        })?;

    if !waitlist.is_open {
        return Err(AppError::Core(CoreError::WaitlistClosed));
    }

    let position = WaitlistRepo::advance_position(&mut *tx, waitlist.id).await?;
    let quoted_mins = estimate_wait_mins(position, input.party_size);
    let share_token = generate_share_token();

    let entry = EntryRepo::insert(
        &mut *tx,
        &NewEntry {
            waitlist_id: waitlist.id,
            name: input.name.clone(),
            phone: input.phone.clone(),
            party_size: input.party_size,
            join_source: input.source.as_str(),
            quoted_mins,
            // The quote is frozen at join; the ETA starts identical and is
            // never revised afterwards.
            eta_mins: quoted_mins,
            position,
            share_token: share_token.clone(),
        },
    )
    .await?;

    EntryRepo::append_update(
        &mut *tx,
        entry.id,
        "joined",
        &json!({ "position": position, "quoted_mins": quoted_mins }),
    )
    .await?;

    EventRepo::insert(
        &mut *tx,
        Some(restaurant.id),
        Some(entry.id),
        "entry_join",
        &json!({ "party_size": input.party_size, "source": input.source.as_str() }),
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        entry_id = entry.id,
        restaurant_id = restaurant.id,
        position,
        quoted_mins,
        quote = %format_wait_mins(quoted_mins),
        "Party joined waitlist"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: JoinResponse {
                entry_id: entry.id,
                share_token,
                position,
                quoted_mins,
            },
        }),
    ))
}

/* --------------------------------------------------------------------------
   Guest share-token views
   -------------------------------------------------------------------------- */

/// Response for `GET /queue/{share_token}`.
#[derive(Debug, Serialize)]
pub struct GuestQueueView {
    pub entry: WaitlistEntry,
    /// Current place among waiting parties (1-based). `None` once the
    /// entry has left the waiting state.
    pub rank: Option<usize>,
    pub updates: Vec<EntryUpdate>,
}

/// GET /queue/{share_token}
///
/// Guest view of one entry. Possession of the token is the only
/// credential. Stored positions are join-time snapshots, so the current
/// rank is derived from the waiting order instead.
pub async fn guest_queue_view(
    State(state): State<AppState>,
    Path(share_token): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entry = EntryRepo::find_by_share_token(&state.pool, &share_token)
        .await?
        .ok_or(CoreError::NotFoundNamed {
            entity: "Entry",
            key: share_token,
        })?;

    let rank = if entry.status == EntryStatus::Waiting.as_str() {
        let waiting = EntryRepo::list_waiting(&state.pool, entry.waitlist_id).await?;
        waiting.iter().position(|e| e.id == entry.id).map(|i| i + 1)
    } else {
        None
    };

    let updates = EntryRepo::list_updates(&state.pool, entry.id).await?;

    Ok(Json(DataResponse {
        data: GuestQueueView {
            entry,
            rank,
            updates,
        },
    }))
}

/// POST /queue/{share_token}/cancel
///
/// Guest self-service cancellation.
pub async fn guest_cancel(
    State(state): State<AppState>,
    Path(share_token): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entry = EntryRepo::find_by_share_token(&state.pool, &share_token)
        .await?
        .ok_or(CoreError::NotFoundNamed {
            entity: "Entry",
            key: share_token,
        })?;

    let entry = apply_transition(&state, entry.id, EntryStatus::Cancelled).await?;
    Ok(Json(DataResponse { data: entry }))
}

/* --------------------------------------------------------------------------
   Staff console actions
   -------------------------------------------------------------------------- */

/// POST /entries/{id}/page
pub async fn page_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = apply_transition(&state, entry_id, EntryStatus::Paged).await?;
    Ok(Json(DataResponse { data: entry }))
}

/// POST /entries/{id}/seat
pub async fn seat_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = apply_transition(&state, entry_id, EntryStatus::Seated).await?;
    Ok(Json(DataResponse { data: entry }))
}

/// POST /entries/{id}/no-show
pub async fn no_show_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = apply_transition(&state, entry_id, EntryStatus::NoShow).await?;
    Ok(Json(DataResponse { data: entry }))
}

/// POST /entries/{id}/cancel
pub async fn cancel_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = apply_transition(&state, entry_id, EntryStatus::Cancelled).await?;
    Ok(Json(DataResponse { data: entry }))
}

/// Body for `PUT /entries/{id}/notes`.
#[derive(Debug, Deserialize)]
pub struct UpdateNotesRequest {
    pub notes: Option<String>,
}

/// PUT /entries/{id}/notes
///
/// Replace the staff notes on an entry. Works in any status.
pub async fn update_notes(
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
    Json(input): Json<UpdateNotesRequest>,
) -> AppResult<impl IntoResponse> {
    let entry = EntryRepo::set_notes(&state.pool, entry_id, input.notes.as_deref())
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "WaitlistEntry",
                id: entry_id,
            })
        })?;

    Ok(Json(DataResponse { data: entry }))
}

/* --------------------------------------------------------------------------
   Shared transition flow
   -------------------------------------------------------------------------- */

/// Move an entry to `to` under the entry row lock, appending the update
/// log record and audit event in the same transaction. Publishes an
/// `entry_paged` bus event after commit so the paging notifier can react.
async fn apply_transition(
    state: &AppState,
    entry_id: DbId,
    to: EntryStatus,
) -> Result<WaitlistEntry, AppError> {
    let mut tx = state.pool.begin().await?;

    let mut entry = EntryRepo::lock_by_id(&mut *tx, entry_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "WaitlistEntry",
                id: entry_id,
            })
        })?;

    let from = EntryStatus::parse(&entry.status)?;
    validate_transition(from, to)?;

    let waitlist = WaitlistRepo::find_by_id(&mut *tx, entry.waitlist_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "Entry {entry_id} references missing waitlist {}",
                entry.waitlist_id
            ))
        })?;

    EntryRepo::set_status(&mut *tx, entry.id, to.as_str()).await?;
    EntryRepo::append_update(&mut *tx, entry.id, to.update_type(), &json!({})).await?;
    EventRepo::insert(
        &mut *tx,
        Some(waitlist.restaurant_id),
        Some(entry.id),
        to.event_type(),
        &json!({ "from": from.as_str() }),
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        entry_id = entry.id,
        restaurant_id = waitlist.restaurant_id,
        from = from.as_str(),
        to = to.as_str(),
        "Entry transitioned"
    );

    if to == EntryStatus::Paged {
        state.event_bus.publish(
            QueueEvent::new("entry_paged")
                .with_restaurant(waitlist.restaurant_id)
                .with_entry(entry.id),
        );
    }

    entry.status = to.as_str().to_string();
    Ok(entry)
}
