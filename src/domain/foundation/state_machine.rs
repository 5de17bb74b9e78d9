//! State machine trait for stage enums.
//!
//! Gives stage enums one place to declare their legal edges, so the entity
//! that owns the stage only asks "may I move there?" before mutating.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors define valid transitions and get a validated
/// `transition_to` for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for DecisionStage {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (Empty, OptionsShown) | (OptionsShown, Selected) | (_, Empty)
///         )
///     }
///     // ...
/// }
///
/// let next = session.stage().transition_to(DecisionStage::Selected)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
