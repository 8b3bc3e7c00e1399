//! Restaurant entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use queueup_core::types::{DbId, Timestamp};

/// A row from the `restaurants` table.
///
/// `open_hours` is stored as JSONB: an array of
/// `{"day": 0-6, "open": "11:00", "close": "22:00"}` objects.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Restaurant {
    pub id: DbId,
    pub org_id: DbId,
    pub name: String,
    pub slug: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub tags: Vec<String>,
    pub walk_in_only: bool,
    pub open_hours: serde_json::Value,
    pub photos: Vec<String>,
    pub sms_enabled: bool,
    pub buffer_mins: i32,
    pub paging_message: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One weekday's opening window inside `open_hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenHours {
    /// 0-6, Sunday through Saturday.
    pub day: i32,
    /// e.g. `"11:00"`.
    pub open: String,
    /// e.g. `"22:00"`.
    pub close: String,
}

/// Per-restaurant queue settings embedded in the create DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantSettings {
    pub sms_enabled: bool,
    pub buffer_mins: i32,
    pub paging_message: String,
}

/// DTO for creating a new restaurant.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRestaurant {
    pub org_id: DbId,
    pub name: String,
    pub slug: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub tags: Vec<String>,
    pub walk_in_only: bool,
    pub open_hours: Vec<OpenHours>,
    pub photos: Vec<String>,
    pub settings: RestaurantSettings,
}
