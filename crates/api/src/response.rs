//! API response types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Response body of a mutation.
#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

/// A list of users with its length.
#[derive(Debug, Serialize)]
pub struct FriendList {
    pub success: bool,
    pub friends: Vec<String>,
    pub count: usize,
}

impl From<Vec<String>> for FriendList {
    fn from(friends: Vec<String>) -> Self {
        Self {
            success: true,
            count: friends.len(),
            friends,
        }
    }
}

/// Users who receive an update.
#[derive(Debug, Serialize)]
pub struct Recipients {
    pub success: bool,
    pub recipients: Vec<String>,
}

/// Registered users.
#[derive(Debug, Serialize)]
pub struct UserList {
    pub success: bool,
    pub users: Vec<String>,
    pub count: usize,
}

impl From<Vec<String>> for UserList {
    fn from(users: Vec<String>) -> Self {
        Self {
            success: true,
            count: users.len(),
            users,
        }
    }
}

/// JSON body paired with a status code.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    status: StatusCode,
    body: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// `200 OK` response.
    pub const fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }
}

impl ApiResponse<Success> {
    /// `201 Created` response for a completed mutation.
    #[must_use]
    pub const fn created() -> Self {
        Self {
            status: StatusCode::CREATED,
            body: Success { success: true },
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
