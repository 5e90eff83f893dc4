//! Friendship entity (symmetric friendship edges).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "friendship")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Lexicographically smaller identifier of the pair
    pub user_a: String,

    /// Lexicographically larger identifier of the pair
    pub user_b: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    /// The member of the edge that is not `user`.
    #[must_use]
    pub fn other(&self, user: &str) -> &str {
        if self.user_a == user {
            &self.user_b
        } else {
            &self.user_a
        }
    }
}

/// Order a pair the way friendship rows store it.
#[must_use]
pub fn canonical_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
