//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept any `PgExecutor` as the first argument — a `&PgPool` for
//! standalone operations, or `&mut *tx` when composing the multi-row
//! waitlist mutations inside a transaction.

pub mod entry_repo;
pub mod event_repo;
pub mod org_repo;
pub mod restaurant_repo;
pub mod user_repo;
pub mod waitlist_repo;

pub use entry_repo::EntryRepo;
pub use event_repo::EventRepo;
pub use org_repo::OrgRepo;
pub use restaurant_repo::RestaurantRepo;
pub use user_repo::UserRepo;
pub use waitlist_repo::WaitlistRepo;
