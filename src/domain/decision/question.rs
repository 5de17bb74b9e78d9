//! Question value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Marker appended to questions cut at a display ceiling.
pub const ELLIPSIS: &str = "...";

/// A user's open question, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question(String);

impl Question {
    /// Creates a question from raw input.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the text is blank after trimming
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns at most `ceiling` characters, followed by [`ELLIPSIS`] when cut.
    pub fn truncated(&self, ceiling: usize) -> String {
        truncate_text(&self.0, ceiling)
    }
}

/// Cuts `text` to `ceiling` characters, appending [`ELLIPSIS`] when anything was dropped.
pub fn truncate_text(text: &str, ceiling: usize) -> String {
    match text.char_indices().nth(ceiling) {
        Some((cut_at, _)) => format!("{}{}", &text[..cut_at], ELLIPSIS),
        None => text.to_string(),
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Question {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Question::new(value)
    }
}

impl From<Question> for String {
    fn from(question: Question) -> Self {
        question.0
    }
}
