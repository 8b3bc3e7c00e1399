//! Request handlers, grouped by resource.

pub mod admin;
pub mod orgs;
pub mod restaurants;
pub mod users;
pub mod waitlist;
