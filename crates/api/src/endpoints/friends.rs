//! Friendship endpoints.

use axum::{Router, extract::State, routing::post};
use serde::Deserialize;
use socialgraph_common::{AppError, AppResult};
use validator::Validate;

use crate::{
    extractors::{INVALID_REQUEST, ValidatedJson, validate_friend_pair},
    middleware::AppState,
    response::{ApiResponse, FriendList, Success},
};

/// Two users, for making friends or intersecting their friend lists.
#[derive(Debug, Deserialize, Validate)]
pub struct FriendPairRequest {
    #[validate(custom(function = "validate_friend_pair"))]
    pub friends: Vec<String>,
}

impl FriendPairRequest {
    fn pair(&self) -> AppResult<(&str, &str)> {
        match self.friends.as_slice() {
            [a, b] => Ok((a, b)),
            _ => Err(AppError::Validation(INVALID_REQUEST.to_string())),
        }
    }
}

/// A single user.
#[derive(Debug, Deserialize, Validate)]
pub struct FriendListRequest {
    #[validate(email(message = "email invalid format"))]
    pub email: String,
}

/// Make two users friends.
async fn add_friends(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<FriendPairRequest>,
) -> AppResult<ApiResponse<Success>> {
    let (a, b) = req.pair()?;
    state.relationship_service.make_friend(a, b).await?;
    Ok(ApiResponse::created())
}

/// Get a user's friends.
async fn list_friends(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<FriendListRequest>,
) -> AppResult<ApiResponse<FriendList>> {
    let friends = state.relationship_service.friends_list(&req.email).await?;
    Ok(ApiResponse::ok(friends.into()))
}

/// Get the friends two users have in common.
async fn list_mutual_friends(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<FriendPairRequest>,
) -> AppResult<ApiResponse<FriendList>> {
    let (a, b) = req.pair()?;
    let friends = state.relationship_service.mutual_friends(a, b).await?;
    Ok(ApiResponse::ok(friends.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-friends", post(add_friends))
        .route("/get-list-friends", post(list_friends))
        .route("/get-mutual-list-friends", post(list_mutual_friends))
}
