//! Axum extractors for authentication and authorization.

pub mod auth;
pub mod rbac;
