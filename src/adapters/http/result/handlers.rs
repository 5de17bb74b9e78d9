//! HTTP handlers for the result endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use crate::adapters::record::LocalRecordIssuer;
use crate::application::handlers::{BuildResultHandler, EmitRecordHandler};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::result::DecisionError;
use crate::ports::{EmitError, RecordResponse};

use super::dto::{CreateRecordRequest, ErrorResponse, HealthResponse, ResultImageQuery};

/// Cards are a pure function of their query, so they may be cached forever.
const IMMUTABLE_CACHE: &str = "public, max-age=31536000, immutable";

const MISSING_FIELDS: &str = "Missing required fields";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ResultAppState {
    build_handler: Arc<BuildResultHandler>,
    emit_handler: Arc<EmitRecordHandler>,
    issuer: Option<LocalRecordIssuer>,
}

impl ResultAppState {
    pub fn new(build_handler: Arc<BuildResultHandler>, emit_handler: Arc<EmitRecordHandler>) -> Self {
        Self {
            build_handler,
            emit_handler,
            issuer: None,
        }
    }

    /// Serves issued metadata from this local issuer.
    pub fn with_issuer(mut self, issuer: LocalRecordIssuer) -> Self {
        self.issuer = Some(issuer);
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/result-image - Render a result card
pub async fn get_result_image(
    State(state): State<ResultAppState>,
    Query(query): Query<ResultImageQuery>,
) -> Response {
    let content = query.into_content(Timestamp::now());

    match state.build_handler.render_card(&content) {
        Ok(image) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, image.media_type),
                (header::CACHE_CONTROL, IMMUTABLE_CACHE.to_string()),
            ],
            image.bytes,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Result card rendering failed");
            let err = DomainError::from(DecisionError::from(e));
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::from(err))).into_response()
        }
    }
}

/// POST /api/records - Issue a record for a decision
pub async fn create_record(
    State(state): State<ResultAppState>,
    body: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(RecordResponse::failed(rejection.body_text())),
            )
                .into_response()
        }
    };
    let request = body.into_record_request(Timestamp::now());

    match state.emit_handler.submit(&request).await {
        Ok(receipt) => {
            info!(external_ref = %receipt.external_ref, "Record created");
            (StatusCode::OK, Json(RecordResponse::issued(receipt))).into_response()
        }
        Err(e) => handle_emit_error(e),
    }
}

/// GET /api/nft-metadata/:id - Metadata of an issued record
pub async fn get_record_metadata(
    State(state): State<ResultAppState>,
    Path(id): Path<u32>,
) -> Response {
    let metadata = match &state.issuer {
        Some(issuer) => issuer.metadata(id).await,
        None => None,
    };

    match metadata {
        Some(metadata) => (StatusCode::OK, Json(metadata)).into_response(),
        None => {
            let err = DomainError::new(ErrorCode::RecordNotFound, format!("Record not found: {}", id))
                .with_detail("id", id.to_string());
            (StatusCode::NOT_FOUND, Json(ErrorResponse::from(err))).into_response()
        }
    }
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

fn handle_emit_error(e: EmitError) -> Response {
    let status = match &e {
        EmitError::Validation(_) => StatusCode::BAD_REQUEST,
        EmitError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EmitError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        EmitError::Network(_)
        | EmitError::UnexpectedStatus { .. }
        | EmitError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
    };
    let message = match &e {
        EmitError::Validation(v) => format!("{}: {}", MISSING_FIELDS, v.field()),
        other => other.to_string(),
    };

    (status, Json(RecordResponse::failed(message))).into_response()
}
