//! Decision session entity.
//!
//! A session is the caller-owned unit of interaction: one question, the
//! flowers drawn for it, and the user's pick. There is no global session;
//! each caller holds its own value and passes it by reference.
//!
//! # Transition discipline
//!
//! Invalid requests never mutate the session and never error. Every operation
//! reports a [`TransitionOutcome`] so callers can tell an applied transition
//! from an ignored one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::classifier::{classify, QuestionKind};
use super::question::Question;
use super::sampler::{sample, OptionSet};
use super::stage::DecisionStage;
use crate::domain::catalog::{FlowerOption, OptionCatalog, OptionId};
use crate::domain::foundation::StateMachine;
use crate::ports::RandomSource;

/// Result of asking the session to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The session moved to a new stage.
    Applied,
    /// The request was ignored; the session is unchanged.
    Ignored(IgnoredReason),
}

impl TransitionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TransitionOutcome::Applied)
    }
}

/// Why a transition was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoredReason {
    /// `ask` with a blank question.
    EmptyQuestion,
    /// The current stage does not allow the requested move.
    InvalidStage {
        from: DecisionStage,
        to: DecisionStage,
    },
    /// `select` with an option outside the current option set.
    UnknownOption(OptionId),
}

/// Decision session - question, offered flowers, chosen flower.
///
/// # Invariants
///
/// - `Empty`: no question, empty option set, nothing selected
/// - `OptionsShown`: question and option set present, nothing selected
/// - `Selected`: `selected` is a member of `option_set`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionSession {
    question: Option<Question>,
    kind: Option<QuestionKind>,
    option_set: OptionSet,
    selected: Option<FlowerOption>,
    stage: DecisionStage,
}

impl DecisionSession {
    /// Creates a session in the `Empty` stage.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// How the current question was classified.
    pub fn kind(&self) -> Option<QuestionKind> {
        self.kind
    }

    pub fn option_set(&self) -> &OptionSet {
        &self.option_set
    }

    pub fn selected(&self) -> Option<&FlowerOption> {
        self.selected.as_ref()
    }

    pub fn stage(&self) -> DecisionStage {
        self.stage
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Poses a question: classifies it, draws a fresh option set and moves to
    /// `OptionsShown`.
    ///
    /// Ignored when the text is blank or the session is in `OptionsShown`.
    pub fn ask(
        &mut self,
        text: &str,
        catalog: &OptionCatalog,
        random: &mut dyn RandomSource,
    ) -> TransitionOutcome {
        let question = match Question::new(text) {
            Ok(question) => question,
            Err(_) => return self.ignore(IgnoredReason::EmptyQuestion),
        };
        let next = match self.stage.transition_to(DecisionStage::OptionsShown) {
            Ok(next) => next,
            Err(_) => return self.ignore_stage(DecisionStage::OptionsShown),
        };

        let kind = classify(&question, random);
        let option_set = sample(catalog, kind.size(), random);

        self.question = Some(question);
        self.kind = Some(kind);
        self.option_set = option_set;
        self.selected = None;
        self.stage = next;
        TransitionOutcome::Applied
    }

    /// Picks one of the offered flowers and moves to `Selected`.
    ///
    /// Ignored outside `OptionsShown` or for an option not on offer.
    pub fn select(&mut self, option_id: &OptionId) -> TransitionOutcome {
        let next = match self.stage.transition_to(DecisionStage::Selected) {
            Ok(next) => next,
            Err(_) => return self.ignore_stage(DecisionStage::Selected),
        };
        let option = match self.option_set.get(option_id) {
            Some(option) => option.clone(),
            None => return self.ignore(IgnoredReason::UnknownOption(option_id.clone())),
        };

        self.selected = Some(option);
        self.stage = next;
        TransitionOutcome::Applied
    }

    /// Discards everything and returns to `Empty`. Always applies.
    pub fn reset(&mut self) -> TransitionOutcome {
        *self = Self::default();
        TransitionOutcome::Applied
    }

    fn ignore_stage(&self, to: DecisionStage) -> TransitionOutcome {
        self.ignore(IgnoredReason::InvalidStage {
            from: self.stage,
            to,
        })
    }

    fn ignore(&self, reason: IgnoredReason) -> TransitionOutcome {
        debug!(stage = %self.stage, ?reason, "Ignored decision transition");
        TransitionOutcome::Ignored(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::{ScriptedRandom, SystemRandom};

    fn catalog() -> &'static OptionCatalog {
        OptionCatalog::standard()
    }

    fn session_with_options(text: &str) -> DecisionSession {
        let mut session = DecisionSession::new();
        let outcome = session.ask(text, catalog(), &mut SystemRandom::seeded(42));
        assert!(outcome.is_applied());
        session
    }

    fn first_option_id(session: &DecisionSession) -> OptionId {
        session.option_set().options()[0].id().clone()
    }

    // ───────────────────────────────────────────────────────────────
    // ask
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn new_session_is_empty() {
        let session = DecisionSession::new();
        assert_eq!(session.stage(), DecisionStage::Empty);
        assert!(session.question().is_none());
        assert!(session.option_set().is_empty());
        assert!(session.selected().is_none());
    }

    #[test]
    fn ask_with_empty_question_is_a_noop() {
        let mut session = DecisionSession::new();
        let outcome = session.ask("", catalog(), &mut SystemRandom::seeded(1));

        assert_eq!(outcome, TransitionOutcome::Ignored(IgnoredReason::EmptyQuestion));
        assert_eq!(session, DecisionSession::new());
    }

    #[test]
    fn ask_with_blank_question_is_a_noop() {
        let mut session = DecisionSession::new();
        session.ask("   \n", catalog(), &mut SystemRandom::seeded(1));
        assert_eq!(session.stage(), DecisionStage::Empty);
    }

    #[test]
    fn ask_shows_classified_number_of_options() {
        let session = session_with_options("Pizza or sushi or tacos?");

        assert_eq!(session.stage(), DecisionStage::OptionsShown);
        assert_eq!(session.kind(), Some(QuestionKind::MultiWay { options: 3 }));
        assert_eq!(session.option_set().len(), 3);
        assert_eq!(session.question().unwrap().as_str(), "Pizza or sushi or tacos?");
    }

    #[test]
    fn ask_while_options_shown_is_ignored() {
        let mut session = session_with_options("Tea or coffee?");
        let before = session.clone();

        let outcome = session.ask("Should I nap?", catalog(), &mut SystemRandom::seeded(3));

        assert_eq!(
            outcome,
            TransitionOutcome::Ignored(IgnoredReason::InvalidStage {
                from: DecisionStage::OptionsShown,
                to: DecisionStage::OptionsShown,
            })
        );
        assert_eq!(session, before);
    }

    #[test]
    fn ask_after_selection_starts_a_new_round() {
        let mut session = session_with_options("Should I go out today?");
        let id = first_option_id(&session);
        session.select(&id);

        let outcome = session.ask(
            "Which book next",
            catalog(),
            &mut ScriptedRandom::new(vec![1, 0, 0, 0, 0]),
        );

        assert!(outcome.is_applied());
        assert_eq!(session.stage(), DecisionStage::OptionsShown);
        assert!(session.selected().is_none());
        assert_eq!(session.option_set().len(), 4);
    }

    // ───────────────────────────────────────────────────────────────
    // select
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn select_offered_option_moves_to_selected() {
        let mut session = session_with_options("Should I go out today?");
        let id = first_option_id(&session);

        assert!(session.select(&id).is_applied());
        assert_eq!(session.stage(), DecisionStage::Selected);
        assert_eq!(session.selected().unwrap().id(), &id);
    }

    #[test]
    fn select_option_not_on_offer_is_ignored() {
        let mut session = DecisionSession::new();
        // rose and sunflower are drawn
        session.ask(
            "Should I go out today?",
            catalog(),
            &mut ScriptedRandom::new(vec![0, 0]),
        );
        let before = session.clone();

        let outcome = session.select(&OptionId::new("leaf"));

        assert_eq!(
            outcome,
            TransitionOutcome::Ignored(IgnoredReason::UnknownOption(OptionId::new("leaf")))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn select_before_ask_is_ignored() {
        let mut session = DecisionSession::new();
        let outcome = session.select(&OptionId::new("rose"));

        assert!(!outcome.is_applied());
        assert_eq!(session.stage(), DecisionStage::Empty);
    }

    #[test]
    fn select_twice_is_ignored() {
        let mut session = session_with_options("Should I go out today?");
        let first = session.option_set().options()[0].id().clone();
        let second = session.option_set().options()[1].id().clone();
        session.select(&first);

        let outcome = session.select(&second);

        assert!(!outcome.is_applied());
        assert_eq!(session.selected().unwrap().id(), &first);
    }

    // ───────────────────────────────────────────────────────────────
    // reset
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn reset_from_every_stage_clears_all_fields() {
        let empty = DecisionSession::new();
        let shown = session_with_options("Tea or coffee?");
        let mut selected = session_with_options("Tea or coffee?");
        let id = first_option_id(&selected);
        selected.select(&id);

        for mut session in [empty, shown, selected] {
            assert!(session.reset().is_applied());
            assert_eq!(session, DecisionSession::new());
        }
    }

    #[test]
    fn full_round_scenario() {
        let mut session = DecisionSession::new();
        session.ask("Should I go out today?", catalog(), &mut SystemRandom::seeded(9));

        assert_eq!(session.option_set().len(), 2);
        let first = session.option_set().options()[0].id().clone();
        let second = session.option_set().options()[1].id().clone();
        assert_ne!(first, second);

        session.select(&first);
        assert_eq!(session.stage(), DecisionStage::Selected);
    }
}
