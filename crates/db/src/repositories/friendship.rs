//! Friendship repository.

use std::sync::Arc;

use crate::entities::{
    Friendship,
    friendship::{self, canonical_pair},
};
use socialgraph_common::{AppError, AppResult, IdGenerator};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select,
    Set, sea_query::OnConflict,
};

/// Friendship repository for database operations.
///
/// Each edge is one row holding the pair in canonical order.
#[derive(Clone)]
pub struct FriendshipRepository {
    db: Arc<DatabaseConnection>,
    id_gen: IdGenerator,
}

impl FriendshipRepository {
    /// Create a new friendship repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            id_gen: IdGenerator::new(),
        }
    }

    /// Create a friendship edge. Returns `false` if the edge already existed.
    pub async fn create(&self, a: &str, b: &str) -> AppResult<bool> {
        let (user_a, user_b) = canonical_pair(a, b);
        let model = friendship::ActiveModel {
            id: Set(self.id_gen.generate()),
            user_a: Set(user_a.to_string()),
            user_b: Set(user_b.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        };

        super::inserted(
            Friendship::insert(model)
                .on_conflict(
                    OnConflict::columns([friendship::Column::UserA, friendship::Column::UserB])
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(self.db.as_ref())
                .await,
        )
    }

    /// Get the friends of a user, oldest friendship first.
    pub async fn find_friends(&self, user: &str) -> AppResult<Vec<String>> {
        let edges = edges_of(user)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(edges
            .iter()
            .map(|edge| edge.other(user).to_string())
            .collect())
    }
}

/// Edges touching `user`, in creation order. Ids only break ties.
fn edges_of(user: &str) -> Select<Friendship> {
    Friendship::find()
        .filter(
            Condition::any()
                .add(friendship::Column::UserA.eq(user))
                .add(friendship::Column::UserB.eq(user)),
        )
        .order_by_asc(friendship::Column::CreatedAt)
        .order_by_asc(friendship::Column::Id)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait};

    fn create_test_friendship(id: &str, a: &str, b: &str) -> friendship::Model {
        let (user_a, user_b) = canonical_pair(a, b);
        friendship::Model {
            id: id.to_string(),
            user_a: user_a.to_string(),
            user_b: user_b.to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn test_canonical_pair_orders_members() {
        assert_eq!(canonical_pair("b", "a"), ("a", "b"));
        assert_eq!(canonical_pair("a", "b"), ("a", "b"));
    }

    #[test]
    fn test_edges_are_ordered_by_creation_time() {
        let sql = edges_of("andy")
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(
            sql.ends_with(r#"ORDER BY "friendship"."created_at" ASC, "friendship"."id" ASC"#),
            "{sql}"
        );
    }

    #[tokio::test]
    async fn test_find_friends_maps_to_other_member() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[
                    create_test_friendship("f1", "andy", "john"),
                    create_test_friendship("f2", "andy", "zoe"),
                    create_test_friendship("f3", "andy", "abe"),
                ]])
                .into_connection(),
        );

        let repo = FriendshipRepository::new(db);
        assert_eq!(
            repo.find_friends("andy").await.unwrap(),
            vec!["john", "zoe", "abe"]
        );
    }

    #[tokio::test]
    async fn test_create_duplicate_edge() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([
                    MockExecResult {
                        last_insert_id: 0,
                        rows_affected: 1,
                    },
                    MockExecResult {
                        last_insert_id: 0,
                        rows_affected: 0,
                    },
                ])
                .into_connection(),
        );

        let repo = FriendshipRepository::new(db);
        assert!(repo.create("andy", "john").await.unwrap());
        assert!(!repo.create("john", "andy").await.unwrap());
    }
}
