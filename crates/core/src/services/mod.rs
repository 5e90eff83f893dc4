//! Business logic services.

pub mod relationship;
pub mod user;

pub use relationship::{GraphPolicy, RelationshipService};
pub use user::UserService;
