//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over ports.

pub mod decision;

pub use decision::{
    AskQuestionCommand, AskQuestionHandler, AskQuestionResult, BuildResultCommand,
    BuildResultHandler, EmitRecordCommand, EmitRecordHandler,
};
