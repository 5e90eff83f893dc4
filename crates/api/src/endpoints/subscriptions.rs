//! Subscription endpoints.

use axum::{Router, extract::State, routing::post};
use serde::Deserialize;
use socialgraph_common::AppResult;
use validator::{Validate, ValidationError};

use crate::{
    extractors::{ValidatedJson, validate_distinct_users},
    middleware::AppState,
    response::{ApiResponse, Success},
};

/// Subscribe `requestor` to updates from `target`.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "requestor_is_not_target"))]
pub struct SubscribeRequest {
    #[validate(email(message = "email invalid format"))]
    pub requestor: String,
    #[validate(email(message = "email invalid format"))]
    pub target: String,
}

fn requestor_is_not_target(req: &SubscribeRequest) -> Result<(), ValidationError> {
    validate_distinct_users(&req.requestor, &req.target)
}

async fn subscribe(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SubscribeRequest>,
) -> AppResult<ApiResponse<Success>> {
    state
        .relationship_service
        .subscribe(&req.requestor, &req.target)
        .await?;
    Ok(ApiResponse::created())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/subscribe", post(subscribe))
}
