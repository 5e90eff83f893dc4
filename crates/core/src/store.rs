//! Relation storage abstraction.
//!
//! The relationship service never touches storage directly. Backends
//! implement [`RelationStore`]; the in-memory one lives in this crate and the
//! database one in `socialgraph-db`.

use async_trait::async_trait;
use socialgraph_common::AppResult;
use std::sync::Arc;

/// Keyed storage for the three relation kinds and the user registry.
///
/// `insert_*` methods are atomic check-and-insert: they return `true` when a
/// new row was written and `false` when an equal row already existed, so
/// concurrent writers on the same pair observe exactly one `true`.
#[async_trait]
pub trait RelationStore: Send + Sync {
    /// Whether the identifier was registered through the user registry.
    async fn user_exists(&self, user: &str) -> AppResult<bool>;

    /// Register an identifier.
    async fn insert_user(&self, user: &str) -> AppResult<bool>;

    /// All registered identifiers, in registration order.
    async fn list_users(&self) -> AppResult<Vec<String>>;

    /// Insert the unordered friendship edge `{a, b}`.
    async fn insert_friendship(&self, a: &str, b: &str) -> AppResult<bool>;

    /// Every identifier sharing a friendship edge with `user`.
    async fn friends_of(&self, user: &str) -> AppResult<Vec<String>>;

    /// Insert the directed subscription `(subscriber, target)`.
    async fn insert_subscription(&self, subscriber: &str, target: &str) -> AppResult<bool>;

    /// Every identifier subscribed to `target`'s updates.
    async fn subscribers_of(&self, target: &str) -> AppResult<Vec<String>>;

    /// Insert the directed block `(blocker, blocked)`.
    async fn insert_block(&self, blocker: &str, blocked: &str) -> AppResult<bool>;

    /// Whether `blocker` has blocked `blocked`.
    async fn is_blocking(&self, blocker: &str, blocked: &str) -> AppResult<bool>;

    /// Every identifier that has blocked `blocked`.
    async fn blockers_of(&self, blocked: &str) -> AppResult<Vec<String>>;

    /// Whether a block exists between the pair in either direction.
    async fn is_blocked_between(&self, a: &str, b: &str) -> AppResult<bool> {
        Ok(self.is_blocking(a, b).await? || self.is_blocking(b, a).await?)
    }
}

/// Shared handle to a relation store.
pub type RelationStoreRef = Arc<dyn RelationStore>;
