//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types
//! that form the vocabulary of the LotusGuess domain.

mod errors;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
