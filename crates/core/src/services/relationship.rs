//! Relationship service.
//!
//! Friendship is symmetric, subscription and block are directed. A block in
//! either direction stops new friendships and subscriptions between the pair,
//! and a block by the receiver always suppresses delivery of the sender's
//! updates. Blocks never remove edges that already exist.

use std::collections::HashSet;

use socialgraph_common::{AppError, AppResult, config::GraphConfig};
use tracing::{debug, info};

use crate::store::RelationStoreRef;

/// Policy knobs for the relationship service.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphPolicy {
    /// Fail with `UserNotFound` for identifiers missing from the user registry.
    pub require_registered_users: bool,
}

impl From<GraphConfig> for GraphPolicy {
    fn from(config: GraphConfig) -> Self {
        Self {
            require_registered_users: config.require_registered_users,
        }
    }
}

/// Relationship service for business logic.
#[derive(Clone)]
pub struct RelationshipService {
    store: RelationStoreRef,
    policy: GraphPolicy,
}

impl RelationshipService {
    /// Create a new relationship service with the default policy.
    #[must_use]
    pub fn new(store: RelationStoreRef) -> Self {
        Self::with_policy(store, GraphPolicy::default())
    }

    /// Create a new relationship service with an explicit policy.
    #[must_use]
    pub fn with_policy(store: RelationStoreRef, policy: GraphPolicy) -> Self {
        Self { store, policy }
    }

    /// Make two users friends.
    pub async fn make_friend(&self, a: &str, b: &str) -> AppResult<()> {
        self.check_pair(a, b, "befriend").await?;

        if self.store.is_blocked_between(a, b).await? {
            return Err(blocked(a, b));
        }

        if !self.store.insert_friendship(a, b).await? {
            return Err(AppError::AlreadyFriends {
                a: a.to_string(),
                b: b.to_string(),
            });
        }

        info!(user_a = a, user_b = b, "Friendship created");
        Ok(())
    }

    /// Get the friends of a user.
    ///
    /// A user without relations, registered or not, has an empty list.
    pub async fn friends_list(&self, user: &str) -> AppResult<Vec<String>> {
        self.check_user(user).await?;

        let friends = self.store.friends_of(user).await?;
        debug!(user = user, count = friends.len(), "Listed friends");
        Ok(friends)
    }

    /// Get the friends two users have in common.
    pub async fn mutual_friends(&self, a: &str, b: &str) -> AppResult<Vec<String>> {
        self.check_pair(a, b, "compare").await?;

        let friends_of_b: HashSet<String> = self.store.friends_of(b).await?.into_iter().collect();
        let mutual = dedup(
            self.store
                .friends_of(a)
                .await?
                .into_iter()
                .filter(|f| friends_of_b.contains(f)),
        );

        debug!(user_a = a, user_b = b, count = mutual.len(), "Listed mutual friends");
        Ok(mutual)
    }

    /// Subscribe to a user's updates. Subscribing twice is not an error.
    pub async fn subscribe(&self, subscriber: &str, target: &str) -> AppResult<()> {
        self.check_pair(subscriber, target, "subscribe to").await?;

        if self.store.is_blocked_between(subscriber, target).await? {
            return Err(blocked(subscriber, target));
        }

        if self.store.insert_subscription(subscriber, target).await? {
            info!(subscriber = subscriber, target = target, "Subscription created");
        } else {
            debug!(subscriber = subscriber, target = target, "Already subscribed");
        }
        Ok(())
    }

    /// Block a user. Blocking is unconditional and idempotent.
    pub async fn block(&self, blocker: &str, blocked: &str) -> AppResult<()> {
        self.check_pair(blocker, blocked, "block").await?;

        if self.store.insert_block(blocker, blocked).await? {
            info!(blocker = blocker, blocked = blocked, "Block created");
        } else {
            debug!(blocker = blocker, blocked = blocked, "Already blocking");
        }
        Ok(())
    }

    /// Resolve who receives an update posted by `sender`.
    ///
    /// Candidates are the sender's friends, then subscribers, then the
    /// mentioned identifiers. Anyone who has blocked the sender is dropped,
    /// mentions included, and the sender never receives its own update.
    /// Duplicates keep their first position.
    pub async fn users_receive_update(
        &self,
        sender: &str,
        mentioned: &[String],
    ) -> AppResult<Vec<String>> {
        self.check_user(sender).await?;

        let blockers: HashSet<String> = self.store.blockers_of(sender).await?.into_iter().collect();
        let friends = self.store.friends_of(sender).await?;
        let subscribers = self.store.subscribers_of(sender).await?;

        let recipients = dedup(
            friends
                .into_iter()
                .chain(subscribers)
                .chain(mentioned.iter().cloned())
                .filter(|r| r != sender && !blockers.contains(r)),
        );

        debug!(
            sender = sender,
            mentioned = mentioned.len(),
            suppressed = blockers.len(),
            count = recipients.len(),
            "Resolved update recipients"
        );
        Ok(recipients)
    }

    async fn check_pair(&self, a: &str, b: &str, action: &str) -> AppResult<()> {
        if a == b {
            return Err(AppError::InvalidArgument(format!(
                "Cannot {action} yourself"
            )));
        }
        self.check_user(a).await?;
        self.check_user(b).await
    }

    async fn check_user(&self, user: &str) -> AppResult<()> {
        ensure_identifier(user)?;
        if self.policy.require_registered_users && !self.store.user_exists(user).await? {
            return Err(AppError::UserNotFound(user.to_string()));
        }
        Ok(())
    }
}

fn ensure_identifier(id: &str) -> AppResult<()> {
    if id.trim().is_empty() {
        return Err(AppError::InvalidArgument(
            "User identifier must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn blocked(a: &str, b: &str) -> AppError {
    AppError::Blocked {
        a: a.to_string(),
        b: b.to_string(),
    }
}

/// Drop repeated identifiers, keeping the first occurrence of each.
fn dedup(ids: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(id.clone())).collect()
}
