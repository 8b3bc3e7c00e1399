use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: queueup_db::DbPool,
    /// Server configuration (JWT secret, CORS origins, bootstrap secret).
    pub config: Arc<ServerConfig>,
    /// In-process event bus feeding the paging notifier.
    pub event_bus: Arc<queueup_events::EventBus>,
}
