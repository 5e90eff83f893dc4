//! User registry endpoints.

use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
use serde::Deserialize;
use socialgraph_common::AppResult;
use validator::Validate;

use crate::{
    extractors::ValidatedJson,
    middleware::AppState,
    response::{ApiResponse, Success, UserList},
};

/// Create user request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "email invalid format"))]
    pub email: String,
}

/// Register a user.
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> AppResult<ApiResponse<Success>> {
    state.user_service.create(&req.email).await?;
    Ok(ApiResponse::created())
}

/// List registered users.
async fn list_users(State(state): State<AppState>) -> AppResult<ApiResponse<UserList>> {
    let users = state.user_service.list().await?;
    Ok(ApiResponse::ok(users.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-user", post(create_user))
        .route("/list-users", get(list_users))
}
