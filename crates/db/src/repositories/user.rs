//! User repository.

use std::sync::Arc;

use crate::entities::{User, user};
use socialgraph_common::{AppError, AppResult, IdGenerator};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::OnConflict,
};

/// User repository for database operations.
#[derive(Clone)]
pub struct UserRepository {
    db: Arc<DatabaseConnection>,
    id_gen: IdGenerator,
}

impl UserRepository {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            id_gen: IdGenerator::new(),
        }
    }

    /// Find a user by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<user::Model>> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Storage(e.to_string()))
    }

    /// Check if a user is registered.
    pub async fn exists(&self, email: &str) -> AppResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Register a user. Returns `false` if the email was already taken.
    pub async fn create(&self, email: &str) -> AppResult<bool> {
        let model = user::ActiveModel {
            id: Set(self.id_gen.generate()),
            email: Set(email.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        };

        super::inserted(
            User::insert(model)
                .on_conflict(
                    OnConflict::column(user::Column::Email)
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(self.db.as_ref())
                .await,
        )
    }

    /// List every registered email in registration order.
    pub async fn list_emails(&self) -> AppResult<Vec<String>> {
        let users = User::find()
            .order_by_asc(user::Column::CreatedAt)
            .order_by_asc(user::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(users.into_iter().map(|u| u.email).collect())
    }
}
