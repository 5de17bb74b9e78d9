//! AskQuestion - poses a question to a decision session.

use std::sync::{Mutex, PoisonError};

use crate::domain::catalog::{FlowerOption, OptionCatalog};
use crate::domain::decision::{DecisionSession, QuestionKind, TransitionOutcome};
use crate::ports::RandomSource;

/// Command to ask a question.
#[derive(Debug, Clone)]
pub struct AskQuestionCommand {
    pub text: String,
}

/// Result of asking a question.
#[derive(Debug, Clone)]
pub struct AskQuestionResult {
    pub outcome: TransitionOutcome,
    /// How the question was classified; `None` when the ask was ignored.
    pub kind: Option<QuestionKind>,
    /// The flowers now on offer.
    pub options: Vec<FlowerOption>,
}

/// Handler for asking questions.
///
/// Owns the random source so every session served by this handler draws
/// from the same stream.
pub struct AskQuestionHandler {
    catalog: &'static OptionCatalog,
    random: Mutex<Box<dyn RandomSource>>,
}

impl AskQuestionHandler {
    pub fn new(catalog: &'static OptionCatalog, random: Box<dyn RandomSource>) -> Self {
        Self {
            catalog,
            random: Mutex::new(random),
        }
    }

    pub fn catalog(&self) -> &OptionCatalog {
        self.catalog
    }

    pub fn handle(&self, session: &mut DecisionSession, cmd: AskQuestionCommand) -> AskQuestionResult {
        let outcome = {
            let mut random = self.random.lock().unwrap_or_else(PoisonError::into_inner);
            session.ask(&cmd.text, self.catalog, &mut **random)
        };

        let kind = if outcome.is_applied() { session.kind() } else { None };

        AskQuestionResult {
            outcome,
            kind,
            options: session.option_set().options().to_vec(),
        }
    }
}
