//! Route configuration for result endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_record, get_record_metadata, get_result_image, health, ResultAppState};

pub const RECORDS_PATH: &str = "/api/records";
pub const HEALTH_PATH: &str = "/health";

/// Creates the result router.
///
/// Routes:
/// - `GET /api/result-image` - Render a result card as SVG
/// - `POST /api/records` - Issue a record for a decision
/// - `GET /api/nft-metadata/:id` - Metadata of an issued record
/// - `GET /health` - Liveness probe
pub fn result_router() -> Router<ResultAppState> {
    Router::new()
        .route("/api/result-image", get(get_result_image))
        .route(RECORDS_PATH, post(create_record))
        .route("/api/nft-metadata/:id", get(get_record_metadata))
        .route(HEALTH_PATH, get(health))
}
