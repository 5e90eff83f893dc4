//! Blocking repository.

use std::sync::Arc;

use crate::entities::{Blocking, blocking};
use socialgraph_common::{AppError, AppResult, IdGenerator};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::OnConflict,
};

/// Blocking repository for database operations.
#[derive(Clone)]
pub struct BlockingRepository {
    db: Arc<DatabaseConnection>,
    id_gen: IdGenerator,
}

impl BlockingRepository {
    /// Create a new blocking repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            id_gen: IdGenerator::new(),
        }
    }

    /// Find a blocking relationship by blocker and blockee.
    pub async fn find_by_pair(
        &self,
        blocker_id: &str,
        blockee_id: &str,
    ) -> AppResult<Option<blocking::Model>> {
        Blocking::find()
            .filter(blocking::Column::BlockerId.eq(blocker_id))
            .filter(blocking::Column::BlockeeId.eq(blockee_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Storage(e.to_string()))
    }

    /// Check if a user is blocking another user.
    pub async fn is_blocking(&self, blocker_id: &str, blockee_id: &str) -> AppResult<bool> {
        Ok(self.find_by_pair(blocker_id, blockee_id).await?.is_some())
    }

    /// Check if either user is blocking the other.
    pub async fn is_blocked_between(&self, user_a: &str, user_b: &str) -> AppResult<bool> {
        Ok(self.is_blocking(user_a, user_b).await? || self.is_blocking(user_b, user_a).await?)
    }

    /// Create a blocking relationship. Returns `false` if it already existed.
    pub async fn create(&self, blocker_id: &str, blockee_id: &str) -> AppResult<bool> {
        let model = blocking::ActiveModel {
            id: Set(self.id_gen.generate()),
            blocker_id: Set(blocker_id.to_string()),
            blockee_id: Set(blockee_id.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        };

        super::inserted(
            Blocking::insert(model)
                .on_conflict(
                    OnConflict::columns([blocking::Column::BlockerId, blocking::Column::BlockeeId])
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(self.db.as_ref())
                .await,
        )
    }

    /// Get the users who have blocked a user.
    pub async fn find_blockers(&self, blockee_id: &str) -> AppResult<Vec<String>> {
        let blockings = Blocking::find()
            .filter(blocking::Column::BlockeeId.eq(blockee_id))
            .order_by_asc(blocking::Column::CreatedAt)
            .order_by_asc(blocking::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(blockings.into_iter().map(|b| b.blocker_id).collect())
    }
}
