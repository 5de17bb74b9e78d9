use thiserror::Error;

use crate::domain::decision::DecisionStage;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::RenderError;

/// Errors raised while turning a session into a result artifact.
#[derive(Debug, Clone, Error)]
pub enum DecisionError {
    #[error("No option selected (session is {0})")]
    NotSelected(DecisionStage),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DecisionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DecisionError::NotSelected(_) => ErrorCode::InvalidStateTransition,
            DecisionError::Render(_) => ErrorCode::RenderFailed,
            DecisionError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<DecisionError> for DomainError {
    fn from(err: DecisionError) -> Self {
        match err {
            DecisionError::Validation(v) => v.into(),
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}
