//! Shared state and the HTTP middleware stack.

use std::{sync::Arc, time::Duration};

use axum::Router;
use socialgraph_core::{GraphPolicy, RelationStoreRef, RelationshipService, UserService};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Per-request deadline.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub relationship_service: RelationshipService,
    pub user_service: UserService,
}

impl AppState {
    /// Build both services over one store.
    #[must_use]
    pub fn new(store: RelationStoreRef, policy: GraphPolicy) -> Self {
        Self {
            relationship_service: RelationshipService::with_policy(Arc::clone(&store), policy),
            user_service: UserService::new(store),
        }
    }
}

/// Wrap a router in request tracing, a request timeout and permissive CORS.
pub fn layered(router: Router) -> Router {
    router
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
