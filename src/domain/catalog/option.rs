//! Flower option value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a catalog entry (a lowercase slug such as `cherry-blossom`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(String);

impl OptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OptionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One symbolic answer: a flower with a fixed meaning.
///
/// Immutable once constructed. The glyph is what the result card shows
/// above the meaning; the label names the flower itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowerOption {
    id: OptionId,
    glyph: String,
    label: String,
    meaning: String,
    description: String,
}

impl FlowerOption {
    pub fn new(
        id: impl Into<OptionId>,
        glyph: impl Into<String>,
        label: impl Into<String>,
        meaning: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            glyph: glyph.into(),
            label: label.into(),
            meaning: meaning.into(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> &OptionId {
        &self.id
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The answer this flower stands for ("Yes", "Later", ...).
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Glyph and label together, e.g. `🌹 Rose`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.glyph, self.label)
    }
}
