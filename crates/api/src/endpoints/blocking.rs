//! Blocking endpoints.

use axum::{Router, extract::State, routing::post};
use serde::Deserialize;
use socialgraph_common::AppResult;
use validator::{Validate, ValidationError};

use crate::{
    extractors::{ValidatedJson, validate_distinct_users},
    middleware::AppState,
    response::{ApiResponse, Success},
};

/// Block user request.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "requestor_is_not_target"))]
pub struct BlockRequest {
    /// User doing the blocking.
    #[validate(email(message = "email invalid format"))]
    pub requestor: String,
    /// User being blocked.
    #[validate(email(message = "email invalid format"))]
    pub target: String,
}

fn requestor_is_not_target(req: &BlockRequest) -> Result<(), ValidationError> {
    validate_distinct_users(&req.requestor, &req.target)
}

/// Block a user.
async fn block_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<BlockRequest>,
) -> AppResult<ApiResponse<Success>> {
    state
        .relationship_service
        .block(&req.requestor, &req.target)
        .await?;
    Ok(ApiResponse::created())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/block", post(block_user))
}
