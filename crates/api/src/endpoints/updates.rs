//! Update delivery endpoints.

use axum::{Router, extract::State, routing::post};
use serde::Deserialize;
use socialgraph_common::AppResult;
use socialgraph_mentions::extract_mentions;
use tracing::debug;
use validator::Validate;

use crate::{
    extractors::ValidatedJson,
    middleware::AppState,
    response::{ApiResponse, Recipients},
};

/// An update posted by `sender`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRequest {
    #[validate(email(message = "email invalid format"))]
    pub sender: String,
    /// Update body; email addresses in it count as mentions.
    #[serde(default)]
    pub text: String,
}

/// Resolve who receives an update.
async fn users_receive_update(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateRequest>,
) -> AppResult<ApiResponse<Recipients>> {
    let mentioned = extract_mentions(&req.text);
    debug!(sender = %req.sender, mentions = mentioned.len(), "Resolving update recipients");

    let recipients = state
        .relationship_service
        .users_receive_update(&req.sender, &mentioned)
        .await?;

    Ok(ApiResponse::ok(Recipients {
        success: true,
        recipients,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/get-list-users-receive-update", post(users_receive_update))
}
