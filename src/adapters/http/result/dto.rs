//! Request and response bodies for the result endpoints.

use chrono::{NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use std::collections::HashMap;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::result::CardContent;
use crate::ports::RecordRequest;

/// Query string of `GET /api/result-image`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultImageQuery {
    #[serde(default)]
    pub question: String,
    /// The chosen flower's meaning.
    #[serde(default)]
    pub answer: String,
    /// Glyph and label, e.g. "🌸 Cherry Blossom".
    #[serde(default)]
    pub flower: String,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD`; today when absent or unparseable.
    #[serde(default)]
    pub date: Option<String>,
}

impl ResultImageQuery {
    pub fn into_content(self, now: Timestamp) -> CardContent {
        let (glyph, label) = match self.flower.trim().split_once(char::is_whitespace) {
            Some((glyph, label)) => (glyph.to_string(), label.trim().to_string()),
            None => (self.flower.trim().to_string(), String::new()),
        };
        let created_at = self
            .date
            .as_deref()
            .and_then(parse_date)
            .unwrap_or(now);

        CardContent {
            question: self.question,
            meaning: self.answer,
            label,
            glyph,
            description: self.description,
            created_at,
        }
    }
}

fn parse_date(date: &str) -> Option<Timestamp> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let midnight = day.and_hms_opt(0, 0, 0)?;
    Some(Timestamp::from_datetime(Utc.from_utc_datetime(&midnight)))
}

/// Body of `POST /api/records`.
///
/// Fields default to empty so a missing field reaches validation and is
/// answered with a `success: false` body instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub option_label: String,
    #[serde(default)]
    pub option_glyph: String,
    #[serde(default)]
    pub option_description: String,
    #[serde(default)]
    pub user_ref: String,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

impl CreateRecordRequest {
    pub fn into_record_request(self, now: Timestamp) -> RecordRequest {
        RecordRequest {
            question: self.question,
            answer: self.answer,
            option_label: self.option_label,
            option_glyph: self.option_glyph,
            option_description: self.option_description,
            user_ref: self.user_ref,
            timestamp: self.timestamp.unwrap_or(now),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Error response body, built from a [`DomainError`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message,
            details: err.details,
        }
    }
}
