//! Database entities.

pub mod blocking;
pub mod friendship;
pub mod subscription;
pub mod user;

pub use blocking::Entity as Blocking;
pub use friendship::Entity as Friendship;
pub use subscription::Entity as Subscription;
pub use user::Entity as User;
