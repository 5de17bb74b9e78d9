//! DecisionStage enum for tracking where a user is in one decision round.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Stage of a decision session.
///
/// Valid transitions:
/// - Empty -> OptionsShown (ask)
/// - Selected -> OptionsShown (ask again)
/// - OptionsShown -> Selected (select)
/// - any -> Empty (reset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStage {
    #[default]
    Empty,
    OptionsShown,
    Selected,
}

impl DecisionStage {
    /// Returns true once the user has picked a flower for this round.
    pub fn is_round_complete(&self) -> bool {
        matches!(self, DecisionStage::Selected)
    }
}

impl StateMachine for DecisionStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DecisionStage::*;
        matches!(
            (self, target),
            (Empty, OptionsShown) | (Selected, OptionsShown) | (OptionsShown, Selected) | (_, Empty)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DecisionStage::*;
        match self {
            Empty => vec![OptionsShown, Empty],
            OptionsShown => vec![Selected, Empty],
            Selected => vec![OptionsShown, Empty],
        }
    }
}

impl fmt::Display for DecisionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionStage::Empty => "Empty",
            DecisionStage::OptionsShown => "OptionsShown",
            DecisionStage::Selected => "Selected",
        };
        write!(f, "{}", s)
    }
}
