//! Record Emitter Port - hands a finished decision to an issuance service.
//!
//! The service durably registers the decision (as a collectible record) and
//! answers with an opaque reference. The wire shapes here are shared by the
//! HTTP client adapter and the HTTP surface that serves the same contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, ValidationError};

/// Port for registering a decision with an external service.
///
/// # Contract
///
/// Implementations must:
/// - call [`RecordRequest::validate`] before any side effect
/// - return `EmitError::Validation` for missing fields, never a transport error
#[async_trait]
pub trait RecordEmitter: Send + Sync {
    /// Registers the decision and returns the service's reference.
    async fn emit(&self, request: &RecordRequest) -> Result<RecordReceipt, EmitError>;
}

/// Request body: `{ question, answer, optionLabel, optionDescription, userRef, timestamp }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRequest {
    pub question: String,
    /// The chosen flower's meaning.
    pub answer: String,
    pub option_label: String,
    #[serde(default)]
    pub option_glyph: String,
    #[serde(default)]
    pub option_description: String,
    /// Opaque account reference; never interpreted.
    pub user_ref: String,
    pub timestamp: Timestamp,
}

impl RecordRequest {
    /// Checks the required fields: question, answer, option label, user ref.
    ///
    /// # Errors
    ///
    /// - `EmptyField` naming the first blank required field
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("question", &self.question),
            ("answer", &self.answer),
            ("optionLabel", &self.option_label),
            ("userRef", &self.user_ref),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }
        Ok(())
    }
}

/// What a successful emit hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordReceipt {
    pub external_ref: String,
    pub rendered_image_ref: Option<String>,
}

/// Response body: `{ success, externalRef, renderedImageRef, error? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered_image_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecordResponse {
    pub fn issued(receipt: RecordReceipt) -> Self {
        Self {
            success: true,
            external_ref: Some(receipt.external_ref),
            rendered_image_ref: receipt.rendered_image_ref,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            external_ref: None,
            rendered_image_ref: None,
            error: Some(error.into()),
        }
    }

    /// Converts a wire response into a receipt.
    ///
    /// # Errors
    ///
    /// - `Rejected` when `success` is false
    /// - `InvalidResponse` when a successful response carries no reference
    pub fn into_receipt(self) -> Result<RecordReceipt, EmitError> {
        if !self.success {
            return Err(EmitError::Rejected(
                self.error
                    .unwrap_or_else(|| "record service reported failure".to_string()),
            ));
        }
        match self.external_ref {
            Some(external_ref) if !external_ref.is_empty() => Ok(RecordReceipt {
                external_ref,
                rendered_image_ref: self.rendered_image_ref,
            }),
            _ => Err(EmitError::invalid_response("missing externalRef")),
        }
    }
}

/// Errors that can occur while emitting a record.
#[derive(Debug, Clone, Error)]
pub enum EmitError {
    /// Required request field missing; nothing was sent.
    #[error("Record validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The service did not answer in time.
    #[error("Record service timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Connection-level failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered `success: false`.
    #[error("Record service rejected the request: {0}")]
    Rejected(String),

    /// The service answered with an unexpected HTTP status.
    #[error("Record service returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be understood.
    #[error("Invalid response from record service: {0}")]
    InvalidResponse(String),
}

impl EmitError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Whether another attempt could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            EmitError::Timeout { .. } | EmitError::Network(_) => true,
            EmitError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
            EmitError::Validation(_) | EmitError::Rejected(_) | EmitError::InvalidResponse(_) => {
                false
            }
        }
    }
}

impl From<EmitError> for DomainError {
    fn from(err: EmitError) -> Self {
        match err {
            EmitError::Validation(v) => v.into(),
            other => DomainError::new(ErrorCode::RecordServiceError, other.to_string()),
        }
    }
}
