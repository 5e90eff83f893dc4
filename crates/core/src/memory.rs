//! In-memory relation store.

use async_trait::async_trait;
use socialgraph_common::AppResult;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use crate::store::RelationStore;

/// Insertion-ordered set of identifiers.
#[derive(Debug, Default)]
struct Adjacency {
    order: Vec<String>,
    members: HashSet<String>,
}

impl Adjacency {
    fn insert(&mut self, id: &str) -> bool {
        if !self.members.insert(id.to_string()) {
            return false;
        }
        self.order.push(id.to_string());
        true
    }

    fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }
}

#[derive(Debug, Default)]
struct Relations {
    users: Adjacency,
    friends: HashMap<String, Adjacency>,
    /// target -> subscribers
    subscribers: HashMap<String, Adjacency>,
    /// blocked -> blockers
    blockers: HashMap<String, Adjacency>,
}

impl Relations {
    fn listed(index: &HashMap<String, Adjacency>, key: &str) -> Vec<String> {
        index
            .get(key)
            .map(|adj| adj.order.clone())
            .unwrap_or_default()
    }

    fn linked(index: &HashMap<String, Adjacency>, key: &str, id: &str) -> bool {
        index.get(key).is_some_and(|adj| adj.contains(id))
    }
}

/// Relation store kept in process memory.
///
/// Writers are serialized behind a single lock, which makes every
/// check-and-insert atomic. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryRelationStore {
    inner: RwLock<Relations>,
}

impl MemoryRelationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RelationStore for MemoryRelationStore {
    async fn user_exists(&self, user: &str) -> AppResult<bool> {
        Ok(self.inner.read().await.users.contains(user))
    }

    async fn insert_user(&self, user: &str) -> AppResult<bool> {
        Ok(self.inner.write().await.users.insert(user))
    }

    async fn list_users(&self) -> AppResult<Vec<String>> {
        Ok(self.inner.read().await.users.order.clone())
    }

    async fn insert_friendship(&self, a: &str, b: &str) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        if Relations::linked(&inner.friends, a, b) {
            return Ok(false);
        }
        inner.friends.entry(a.to_string()).or_default().insert(b);
        inner.friends.entry(b.to_string()).or_default().insert(a);
        Ok(true)
    }

    async fn friends_of(&self, user: &str) -> AppResult<Vec<String>> {
        Ok(Relations::listed(&self.inner.read().await.friends, user))
    }

    async fn insert_subscription(&self, subscriber: &str, target: &str) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner
            .subscribers
            .entry(target.to_string())
            .or_default()
            .insert(subscriber))
    }

    async fn subscribers_of(&self, target: &str) -> AppResult<Vec<String>> {
        Ok(Relations::listed(&self.inner.read().await.subscribers, target))
    }

    async fn insert_block(&self, blocker: &str, blocked: &str) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner
            .blockers
            .entry(blocked.to_string())
            .or_default()
            .insert(blocker))
    }

    async fn is_blocking(&self, blocker: &str, blocked: &str) -> AppResult<bool> {
        Ok(Relations::linked(
            &self.inner.read().await.blockers,
            blocked,
            blocker,
        ))
    }

    async fn blockers_of(&self, blocked: &str) -> AppResult<Vec<String>> {
        Ok(Relations::listed(&self.inner.read().await.blockers, blocked))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test]
    async fn test_friendship_is_stored_in_both_directions() {
        let store = MemoryRelationStore::new();

        assert!(store.insert_friendship("a", "b").await.unwrap());
        assert!(!store.insert_friendship("b", "a").await.unwrap());

        assert_eq!(store.friends_of("a").await.unwrap(), vec!["b"]);
        assert_eq!(store.friends_of("b").await.unwrap(), vec!["a"]);
    }

    #[tokio::test]
    async fn test_subscription_is_directed() {
        let store = MemoryRelationStore::new();

        assert!(store.insert_subscription("fan", "star").await.unwrap());
        assert!(!store.insert_subscription("fan", "star").await.unwrap());

        assert_eq!(store.subscribers_of("star").await.unwrap(), vec!["fan"]);
        assert!(store.subscribers_of("fan").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_block_indexes_by_blocked_user() {
        let store = MemoryRelationStore::new();

        assert!(store.insert_block("a", "b").await.unwrap());
        assert!(store.insert_block("c", "b").await.unwrap());

        assert!(store.is_blocking("a", "b").await.unwrap());
        assert!(!store.is_blocking("b", "a").await.unwrap());
        assert!(store.is_blocked_between("b", "a").await.unwrap());
        assert_eq!(store.blockers_of("b").await.unwrap(), vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_users_keep_registration_order() {
        let store = MemoryRelationStore::new();

        assert!(store.insert_user("z@example.com").await.unwrap());
        assert!(store.insert_user("a@example.com").await.unwrap());
        assert!(!store.insert_user("z@example.com").await.unwrap());

        assert_eq!(
            store.list_users().await.unwrap(),
            vec!["z@example.com", "a@example.com"]
        );
        assert!(store.user_exists("a@example.com").await.unwrap());
        assert!(!store.user_exists("A@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_keys_read_as_empty() {
        let store = MemoryRelationStore::new();

        assert!(store.friends_of("nobody").await.unwrap().is_empty());
        assert!(store.subscribers_of("nobody").await.unwrap().is_empty());
        assert!(store.blockers_of("nobody").await.unwrap().is_empty());
        assert!(!store.is_blocked_between("nobody", "else").await.unwrap());
    }
}
