//! Subscription repository.

use std::sync::Arc;

use crate::entities::{Subscription, subscription};
use socialgraph_common::{AppError, AppResult, IdGenerator};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::OnConflict,
};

/// Subscription repository for database operations.
#[derive(Clone)]
pub struct SubscriptionRepository {
    db: Arc<DatabaseConnection>,
    id_gen: IdGenerator,
}

impl SubscriptionRepository {
    /// Create a new subscription repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            id_gen: IdGenerator::new(),
        }
    }

    /// Create a subscription. Returns `false` if it already existed.
    pub async fn create(&self, subscriber_id: &str, target_id: &str) -> AppResult<bool> {
        let model = subscription::ActiveModel {
            id: Set(self.id_gen.generate()),
            subscriber_id: Set(subscriber_id.to_string()),
            target_id: Set(target_id.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        };

        super::inserted(
            Subscription::insert(model)
                .on_conflict(
                    OnConflict::columns([
                        subscription::Column::SubscriberId,
                        subscription::Column::TargetId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db.as_ref())
                .await,
        )
    }

    /// Get the users subscribed to a target, oldest first.
    pub async fn find_subscribers(&self, target_id: &str) -> AppResult<Vec<String>> {
        let subscriptions = Subscription::find()
            .filter(subscription::Column::TargetId.eq(target_id))
            .order_by_asc(subscription::Column::CreatedAt)
            .order_by_asc(subscription::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(subscriptions
            .into_iter()
            .map(|s| s.subscriber_id)
            .collect())
    }
}
