//! User registry service.

use socialgraph_common::{AppError, AppResult};
use tracing::info;

use crate::store::RelationStoreRef;

/// User service for the identifier registry.
///
/// Registration is optional for the relationship operations unless the
/// graph policy requires it.
#[derive(Clone)]
pub struct UserService {
    store: RelationStoreRef,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub fn new(store: RelationStoreRef) -> Self {
        Self { store }
    }

    /// Register a new user.
    pub async fn create(&self, email: &str) -> AppResult<()> {
        if email.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "User identifier must not be empty".to_string(),
            ));
        }

        if !self.store.insert_user(email).await? {
            return Err(AppError::UserAlreadyExists(email.to_string()));
        }

        info!(user = email, "User registered");
        Ok(())
    }

    /// List every registered user.
    pub async fn list(&self) -> AppResult<Vec<String>> {
        self.store.list_users().await
    }
}
