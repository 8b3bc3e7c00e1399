//! JWT validation for tokens issued by the external identity provider.

pub mod jwt;
