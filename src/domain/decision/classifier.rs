//! Question classifier - decides how many flowers a question gets.
//!
//! Rules, first match wins:
//!
//! 1. **Binary** (2 flowers): the lower-cased text contains `should`, `will`,
//!    `can`, `do`, `yes` or `no` anywhere, or it has a `?` together with the
//!    standalone pronoun `i` or `we`.
//! 2. **Multi-way**: N standalone `or` tokens give `min(N + 1, 6)` flowers.
//! 3. **Open-ended**: 3 or 4 flowers, drawn from the random source.
//!
//! The order is load-bearing. "Should I eat pizza or tacos or ramen?" is binary
//! even though it names three alternatives.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::question::Question;
use crate::ports::RandomSource;

/// Smallest option set ever offered.
pub const MIN_OPTIONS: usize = 2;

/// Largest option set ever offered.
pub const MAX_OPTIONS: usize = 6;

/// Substrings that mark a yes/no question.
const BINARY_MARKERS: [&str; 6] = ["should", "will", "can", "do", "yes", "no"];

/// Standalone words that, with a question mark, mark a personal yes/no question.
const FIRST_PERSON_PRONOUNS: [&str; 2] = ["i", "we"];

const OPEN_ENDED_SIZES: [usize; 2] = [3, 4];

/// Which rule classified a question, with the resulting option count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Yes/no question.
    Binary,
    /// "A or B or C" question; `options` is already capped.
    MultiWay { options: usize },
    /// No detectable structure.
    OpenEnded { options: usize },
}

impl QuestionKind {
    /// Number of flowers to offer.
    pub fn size(&self) -> usize {
        match self {
            QuestionKind::Binary => MIN_OPTIONS,
            QuestionKind::MultiWay { options } | QuestionKind::OpenEnded { options } => *options,
        }
    }
}

/// Classifies a question. Only the open-ended fallback touches `random`.
pub fn classify(question: &Question, random: &mut dyn RandomSource) -> QuestionKind {
    let text = question.as_str().to_lowercase();

    let kind = if is_binary(&text) {
        QuestionKind::Binary
    } else {
        match count_or_tokens(&text) {
            0 => QuestionKind::OpenEnded {
                options: OPEN_ENDED_SIZES[random.next_index(OPEN_ENDED_SIZES.len())],
            },
            n => QuestionKind::MultiWay {
                options: (n + 1).min(MAX_OPTIONS),
            },
        }
    };

    debug!(?kind, size = kind.size(), "Classified question");
    kind
}

fn is_binary(text: &str) -> bool {
    if BINARY_MARKERS.iter().any(|marker| text.contains(marker)) {
        return true;
    }
    text.contains('?') && words(text).any(|word| FIRST_PERSON_PRONOUNS.contains(&word))
}

fn count_or_tokens(text: &str) -> usize {
    words(text).filter(|word| *word == "or").count()
}

/// Splits on anything that is not an ASCII word character, matching the
/// usual `\b` notion of a word boundary.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
}
