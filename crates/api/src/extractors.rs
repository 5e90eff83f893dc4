//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use socialgraph_common::AppError;
use tracing::debug;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// Message for a body that is not the expected JSON shape.
pub const INVALID_BODY: &str = "invalid request body";
/// Message for a `friends` field that is not two distinct users.
pub const INVALID_REQUEST: &str = "request invalid";
/// Message for an identifier that is not an email address.
pub const INVALID_EMAIL: &str = "email invalid format";

/// JSON body that has passed its `Validate` rules.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(error = %rejection, "Rejected request body");
                AppError::BadRequest(INVALID_BODY.to_string())
            })?;

        value.validate().map_err(first_message)?;
        Ok(Self(value))
    }
}

/// Collapse validation errors to the first custom message.
fn first_message(errors: ValidationErrors) -> AppError {
    let message = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| errors.to_string());

    AppError::Validation(message)
}

/// Exactly two distinct, email-shaped identifiers.
pub fn validate_friend_pair(friends: &[String]) -> Result<(), ValidationError> {
    match friends {
        [a, b] if a != b => {
            if a.validate_email() && b.validate_email() {
                Ok(())
            } else {
                Err(ValidationError::new("email").with_message(INVALID_EMAIL.into()))
            }
        }
        _ => Err(ValidationError::new("pair").with_message(INVALID_REQUEST.into())),
    }
}

/// Two different users on either side of a directed relation.
pub fn validate_distinct_users(from: &str, to: &str) -> Result<(), ValidationError> {
    if from == to {
        return Err(ValidationError::new("distinct").with_message(INVALID_REQUEST.into()));
    }
    Ok(())
}
