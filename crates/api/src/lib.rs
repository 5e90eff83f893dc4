//! HTTP API layer for socialgraph.
//!
//! - **Endpoints**: one POST route per relationship operation, plus the user
//!   registry
//! - **Extractors**: JSON body binding with validation
//! - **Middleware**: shared state, request tracing, CORS and timeouts
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

pub use endpoints::router;
pub use middleware::AppState;
