//! Error types for socialgraph.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
///
/// Every variant is a failed request and renders as `400 Bad Request`,
/// storage failures included.
#[derive(Debug, Error)]
pub enum AppError {
    // === Relationship Errors ===
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{a} and {b} are already friends")]
    AlreadyFriends { a: String, b: String },

    #[error("A block exists between {a} and {b}")]
    Blocked { a: String, b: String },

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    // === Request Errors ===
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    // === Server Errors ===
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Returns the stable error code used in logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::AlreadyFriends { .. } => "ALREADY_FRIENDS",
            Self::Blocked { .. } => "BLOCKED",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Returns whether this error should be logged at error level.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.error_code();

        if self.is_server_error() {
            tracing::error!(error = %self, code = code, "Server error occurred");
        } else {
            tracing::debug!(error = %self, code = code, "Client error occurred");
        }

        let body = Json(json!({ "error": self.to_string() }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_every_error_is_bad_request() {
        let errors = [
            AppError::InvalidArgument("self".to_string()),
            AppError::AlreadyFriends {
                a: "a@example.com".to_string(),
                b: "b@example.com".to_string(),
            },
            AppError::Blocked {
                a: "a@example.com".to_string(),
                b: "b@example.com".to_string(),
            },
            AppError::UserNotFound("a@example.com".to_string()),
            AppError::Storage("connection reset".to_string()),
        ];

        for err in errors {
            let message = err.to_string();
            let (status, _) = body_json(err).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{message}");
        }
    }

    #[test]
    fn test_only_storage_errors_are_server_errors() {
        assert!(AppError::Storage("down".to_string()).is_server_error());
        assert!(!AppError::BadRequest("x".to_string()).is_server_error());
        assert!(!AppError::Validation("x".to_string()).is_server_error());
    }

    #[test]
    fn test_already_friends_message_names_both_users() {
        let err = AppError::AlreadyFriends {
            a: "andy@example.com".to_string(),
            b: "john@example.com".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "andy@example.com and john@example.com are already friends"
        );
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let (status, body) =
            body_json(AppError::UserNotFound("ghost@example.com".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "User not found: ghost@example.com" })
        );
    }

    #[tokio::test]
    async fn test_request_errors_render_bare_message() {
        let (_, body) = body_json(AppError::BadRequest("invalid request body".to_string())).await;
        assert_eq!(body, json!({ "error": "invalid request body" }));

        let (_, body) = body_json(AppError::Validation("request invalid".to_string())).await;
        assert_eq!(body, json!({ "error": "request invalid" }));
    }
}
