//! Database-backed relation store.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use socialgraph_common::AppResult;
use socialgraph_core::RelationStore;

use crate::repositories::{
    BlockingRepository, FriendshipRepository, SubscriptionRepository, UserRepository,
};

/// [`RelationStore`] persisted in `PostgreSQL`.
///
/// Uniqueness of every relation is enforced by the table indexes, so the
/// check-and-insert contract holds across processes sharing the database.
#[derive(Clone)]
pub struct DbRelationStore {
    users: UserRepository,
    friendships: FriendshipRepository,
    subscriptions: SubscriptionRepository,
    blockings: BlockingRepository,
}

impl DbRelationStore {
    /// Create a store over an open connection.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            users: UserRepository::new(Arc::clone(&db)),
            friendships: FriendshipRepository::new(Arc::clone(&db)),
            subscriptions: SubscriptionRepository::new(Arc::clone(&db)),
            blockings: BlockingRepository::new(db),
        }
    }
}

#[async_trait]
impl RelationStore for DbRelationStore {
    async fn user_exists(&self, user: &str) -> AppResult<bool> {
        self.users.exists(user).await
    }

    async fn insert_user(&self, user: &str) -> AppResult<bool> {
        self.users.create(user).await
    }

    async fn list_users(&self) -> AppResult<Vec<String>> {
        self.users.list_emails().await
    }

    async fn insert_friendship(&self, a: &str, b: &str) -> AppResult<bool> {
        self.friendships.create(a, b).await
    }

    async fn friends_of(&self, user: &str) -> AppResult<Vec<String>> {
        self.friendships.find_friends(user).await
    }

    async fn insert_subscription(&self, subscriber: &str, target: &str) -> AppResult<bool> {
        self.subscriptions.create(subscriber, target).await
    }

    async fn subscribers_of(&self, target: &str) -> AppResult<Vec<String>> {
        self.subscriptions.find_subscribers(target).await
    }

    async fn insert_block(&self, blocker: &str, blocked: &str) -> AppResult<bool> {
        self.blockings.create(blocker, blocked).await
    }

    async fn is_blocking(&self, blocker: &str, blocked: &str) -> AppResult<bool> {
        self.blockings.is_blocking(blocker, blocked).await
    }

    async fn blockers_of(&self, blocked: &str) -> AppResult<Vec<String>> {
        self.blockings.find_blockers(blocked).await
    }

    async fn is_blocked_between(&self, a: &str, b: &str) -> AppResult<bool> {
        self.blockings.is_blocked_between(a, b).await
    }
}
