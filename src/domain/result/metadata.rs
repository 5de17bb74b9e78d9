//! Collectible metadata describing an issued decision record.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::ports::RecordRequest;

/// Route serving the card image for a set of query parameters.
pub const RESULT_IMAGE_PATH: &str = "/api/result-image";

/// Route prefix serving issued record metadata.
pub const RECORD_METADATA_PATH: &str = "/api/nft-metadata";

/// Questions in image URLs are cut to this many characters.
pub const IMAGE_URL_QUESTION_LIMIT: usize = 100;

pub const CREATED_BY: &str = "LotusGuess";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordAttribute {
    pub trait_type: String,
    pub value: String,
}

impl RecordAttribute {
    fn new(trait_type: &str, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: value.into(),
        }
    }
}

/// Metadata document stored for every issued record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<RecordAttribute>,
    pub external_url: String,
    pub created_by: String,
    pub created_at: Timestamp,
}

impl RecordMetadata {
    /// Describes a validated record request.
    pub fn describe(request: &RecordRequest, image_url: String, origin_url: &str) -> Self {
        let flower = flower_name(request);
        Self {
            name: format!("LotusGuess Decision: {}", request.answer),
            description: format!(
                "A decision made with flowers 🌸\n\nQuestion: {}\nAnswer: {}\nChosen Flower: {}\nMeaning: {}",
                request.question, request.answer, flower, request.option_description
            ),
            image: image_url,
            attributes: vec![
                RecordAttribute::new("Question", request.question.as_str()),
                RecordAttribute::new("Answer", request.answer.as_str()),
                RecordAttribute::new("Flower", flower),
                RecordAttribute::new("Flower Meaning", request.option_description.as_str()),
                RecordAttribute::new("Decision Date", request.timestamp.date_stamp()),
            ],
            external_url: origin_url.to_string(),
            created_by: CREATED_BY.to_string(),
            created_at: request.timestamp,
        }
    }

    pub fn attribute(&self, trait_type: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.trait_type == trait_type)
            .map(|a| a.value.as_str())
    }
}

/// "🌹 Rose" when a glyph is known, otherwise the bare label.
fn flower_name(request: &RecordRequest) -> String {
    if request.option_glyph.is_empty() {
        request.option_label.clone()
    } else {
        format!("{} {}", request.option_glyph, request.option_label)
    }
}

/// URL of the card image for a record, served by the result-image route.
///
/// Any path in `origin_url` is kept as a prefix, matching [`record_metadata_url`].
///
/// # Errors
///
/// - `InvalidFormat` if `origin_url` is not an absolute URL
pub fn result_image_url(origin_url: &str, request: &RecordRequest) -> Result<String, ValidationError> {
    let question: String = request
        .question
        .chars()
        .take(IMAGE_URL_QUESTION_LIMIT)
        .collect();
    let base = format!("{}{}", origin_url.trim_end_matches('/'), RESULT_IMAGE_PATH);
    let mut url = Url::parse(&base)
        .map_err(|e| ValidationError::invalid_format("origin_url", e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("question", &question)
        .append_pair("answer", &request.answer)
        .append_pair("flower", &flower_name(request))
        .append_pair("description", &request.option_description)
        .append_pair("date", &request.timestamp.date_stamp());
    Ok(url.to_string())
}

/// Public reference for an issued record id.
pub fn record_metadata_url(origin_url: &str, record_id: u32) -> String {
    format!(
        "{}{}/{}",
        origin_url.trim_end_matches('/'),
        RECORD_METADATA_PATH,
        record_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RecordRequest {
        RecordRequest {
            question: "Should I go out today?".to_string(),
            answer: "Yes".to_string(),
            option_label: "Rose".to_string(),
            option_glyph: "🌹".to_string(),
            option_description: "Love and passion".to_string(),
            user_ref: "0xabc".to_string(),
            timestamp: Timestamp::from_unix_secs(1705314600).unwrap(),
        }
    }

    #[test]
    fn metadata_names_the_answer() {
        let metadata = RecordMetadata::describe(&request(), "http://img".into(), "http://localhost:3000");

        assert_eq!(metadata.name, "LotusGuess Decision: Yes");
        assert_eq!(metadata.image, "http://img");
        assert_eq!(metadata.external_url, "http://localhost:3000");
        assert_eq!(metadata.created_by, "LotusGuess");
        assert!(metadata.description.contains("Chosen Flower: 🌹 Rose"));
    }

    #[test]
    fn metadata_carries_five_attributes() {
        let metadata = RecordMetadata::describe(&request(), String::new(), "http://localhost:3000");

        assert_eq!(metadata.attributes.len(), 5);
        assert_eq!(metadata.attribute("Question"), Some("Should I go out today?"));
        assert_eq!(metadata.attribute("Answer"), Some("Yes"));
        assert_eq!(metadata.attribute("Flower"), Some("🌹 Rose"));
        assert_eq!(metadata.attribute("Flower Meaning"), Some("Love and passion"));
        assert_eq!(metadata.attribute("Decision Date"), Some("2024-01-15"));
    }

    #[test]
    fn image_url_points_at_result_route() {
        let url = result_image_url("http://localhost:3000", &request()).unwrap();

        assert!(url.starts_with("http://localhost:3000/api/result-image?question=Should+I+go+out+today%3F"));
        assert!(url.contains("answer=Yes"));
        assert!(url.contains("date=2024-01-15"));
    }

    #[test]
    fn image_url_cuts_long_questions() {
        let mut req = request();
        req.question = "q".repeat(150);
        let url = result_image_url("http://localhost:3000", &req).unwrap();

        assert!(url.contains(&format!("question={}&", "q".repeat(100))));
    }

    #[test]
    fn image_url_rejects_relative_origin() {
        let err = result_image_url("localhost", &request()).unwrap_err();
        assert_eq!(err.field(), "origin_url");
    }

    #[test]
    fn image_url_keeps_origin_path_prefix() {
        let url = result_image_url("https://example.com/lotus/", &request()).unwrap();

        assert!(url.starts_with("https://example.com/lotus/api/result-image?question="));
        assert!(record_metadata_url("https://example.com/lotus/", 7)
            .starts_with("https://example.com/lotus/api/"));
    }

    #[test]
    fn metadata_url_joins_origin_and_id() {
        assert_eq!(
            record_metadata_url("http://localhost:3000/", 42),
            "http://localhost:3000/api/nft-metadata/42"
        );
    }
}
