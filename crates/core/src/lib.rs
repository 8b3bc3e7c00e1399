//! Queue Up domain logic.
//!
//! Pure, storage-agnostic building blocks shared by the database and API
//! crates:
//!
//! - [`entry`] — waitlist entry status machine with centralized transition
//!   validation.
//! - [`eta`] — the linear wait-time heuristic used for quotes and ETAs.
//! - [`token`] — public share token generation.
//! - [`roles`] — well-known user role constants.
//! - [`error`] — the [`CoreError`](error::CoreError) taxonomy.

pub mod entry;
pub mod error;
pub mod eta;
pub mod roles;
pub mod token;
pub mod types;
