//! Response envelope shared by all handlers.
//!
//! Successful responses are wrapped in `{ "data": ... }`; errors come out
//! of [`AppError`](crate::error::AppError) as `{ "error", "code" }`.
//! Using [`DataResponse`] rather than ad-hoc `json!({ "data": ... })`
//! keeps the payload type checked at compile time.

use serde::Serialize;

/// The `{ "data": T }` envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: entry }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
