//! Result module - turns a finished decision into a shareable artifact.
//!
//! - `CardLayout` - fixed placement of the card's fields
//! - `ResultArtifact` - rendered image, share text and record references
//! - `RecordMetadata` - collectible description of an issued record

mod artifact;
mod errors;
mod layout;
mod metadata;
mod share;

pub use artifact::ResultArtifact;
pub use errors::DecisionError;
pub use layout::{
    CardContent, CardField, CardLayout, FieldKind, FontWeight, Frame, TextStyle, CANVAS_SIZE,
    CARD_FOOTER, CARD_TITLE, FALLBACK_GLYPH, QUESTION_CEILING,
};
pub use metadata::{
    record_metadata_url, result_image_url, RecordAttribute, RecordMetadata,
    IMAGE_URL_QUESTION_LIMIT, RECORD_METADATA_PATH, RESULT_IMAGE_PATH,
};
pub use share::{compose_link, share_text, ShareSettings, DEFAULT_COMPOSE_URL, DEFAULT_SHARE_SUFFIX};
