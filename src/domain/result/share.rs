//! Share text for a finished decision.

use reqwest::Url;

use crate::domain::catalog::FlowerOption;
use crate::domain::decision::Question;
use crate::domain::foundation::ValidationError;

pub const DEFAULT_SHARE_SUFFIX: &str = "Decide with flowers on LotusGuess 🌸";
pub const DEFAULT_COMPOSE_URL: &str = "https://warpcast.com/~/compose";

/// Where shares point and how they sign off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSettings {
    /// Public origin of the app, included in every share.
    pub origin_url: String,
    /// Promotional line appended after the answer.
    pub suffix: String,
    /// Social compose endpoint for deep links.
    pub compose_url: String,
}

impl ShareSettings {
    pub fn new(origin_url: impl Into<String>) -> Self {
        Self {
            origin_url: origin_url.into(),
            suffix: DEFAULT_SHARE_SUFFIX.to_string(),
            compose_url: DEFAULT_COMPOSE_URL.to_string(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_compose_url(mut self, compose_url: impl Into<String>) -> Self {
        self.compose_url = compose_url.into();
        self
    }
}

/// Human-readable share text: question, flower and meaning, suffix, origin.
pub fn share_text(question: &Question, option: &FlowerOption, settings: &ShareSettings) -> String {
    format!(
        "{}\n{} The flowers say: {}\n{} {}",
        question.as_str(),
        option.glyph(),
        option.meaning(),
        settings.suffix,
        settings.origin_url
    )
}

/// Compose deep link carrying `text` and embedding the origin.
///
/// # Errors
///
/// - `InvalidFormat` if the configured compose URL does not parse
pub fn compose_link(text: &str, settings: &ShareSettings) -> Result<String, ValidationError> {
    let url = Url::parse_with_params(
        &settings.compose_url,
        &[("text", text), ("embeds[]", settings.origin_url.as_str())],
    )
    .map_err(|e| ValidationError::invalid_format("compose_url", e.to_string()))?;
    Ok(url.to_string())
}
