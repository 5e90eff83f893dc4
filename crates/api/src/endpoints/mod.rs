//! API endpoints.

mod blocking;
mod friends;
mod subscriptions;
mod updates;
mod users;

use axum::Router;

use crate::middleware::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(friends::router())
        .merge(subscriptions::router())
        .merge(blocking::router())
        .merge(updates::router())
        .merge(users::router())
}
