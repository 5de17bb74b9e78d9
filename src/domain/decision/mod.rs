//! Decision module - from question to chosen flower.
//!
//! - `question` - trimmed, non-empty question text
//! - `classifier` - how many flowers a question gets
//! - `sampler` - which flowers are drawn
//! - `stage` / `session` - the ask → select → reset state machine

mod classifier;
mod question;
mod sampler;
mod session;
mod stage;

pub use classifier::{classify, QuestionKind, MAX_OPTIONS, MIN_OPTIONS};
pub use question::{truncate_text, Question, ELLIPSIS};
pub use sampler::{sample, OptionSet};
pub use session::{DecisionSession, IgnoredReason, TransitionOutcome};
pub use stage::DecisionStage;
