//! Role-based access control extractor.
//!
//! Wraps [`CurrentUser`] and rejects requests whose role does not meet the
//! requirement, so admin-only handlers enforce authorization at the type
//! level. Per-org ownership checks are finer grained than a role and live
//! in the handlers instead (`ensure_org_authority`).

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use queueup_core::error::CoreError;
use queueup_core::roles::ROLE_ADMIN;
use queueup_db::models::User;

use super::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
