//! Decision handlers - drive a session from question to recorded result.

mod ask_question;
mod build_result;
mod emit_record;

pub use ask_question::{AskQuestionCommand, AskQuestionHandler, AskQuestionResult};
pub use build_result::{BuildResultCommand, BuildResultHandler};
pub use emit_record::{EmitRecordCommand, EmitRecordHandler};
