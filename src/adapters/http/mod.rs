//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter for endpoint exposure.

pub mod result;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use result::{result_router, ResultAppState};

/// Full application router with request tracing.
pub fn app_router(state: ResultAppState) -> Router {
    result_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
