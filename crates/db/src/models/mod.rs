//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts where one is needed

pub mod entry;
pub mod event;
pub mod org;
pub mod restaurant;
pub mod user;
pub mod waitlist;

pub use entry::{EntryUpdate, NewEntry, WaitlistEntry};
pub use event::Event;
pub use org::{CreateOrg, Org};
pub use restaurant::{CreateRestaurant, OpenHours, Restaurant, RestaurantSettings};
pub use user::User;
pub use waitlist::Waitlist;
