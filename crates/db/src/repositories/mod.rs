//! Repositories, one per table.

pub mod blocking;
pub mod friendship;
pub mod subscription;
pub mod user;

pub use blocking::BlockingRepository;
pub use friendship::FriendshipRepository;
pub use subscription::SubscriptionRepository;
pub use user::UserRepository;

use socialgraph_common::{AppError, AppResult};
use sea_orm::DbErr;

/// Map the result of an `ON CONFLICT DO NOTHING` insert to "row was written".
fn inserted(result: Result<u64, DbErr>) -> AppResult<bool> {
    result
        .map(|rows| rows > 0)
        .map_err(|e| AppError::Storage(e.to_string()))
}
