//! Image Renderer Port - turns a result card layout into image bytes.
//!
//! The domain decides what goes on the card and where (`CardLayout`); a
//! renderer only decides the encoding. Vector and raster backends are
//! interchangeable behind this trait.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::result::CardLayout;

/// Port for encoding a composed result card.
///
/// # Contract
///
/// Implementations must:
/// - draw every field of the layout at its frame
/// - be a pure function of the layout (same layout, same bytes)
pub trait ImageRenderer: Send + Sync {
    /// Encodes the layout.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the backend cannot encode the card.
    fn render(&self, layout: &CardLayout) -> Result<RenderedImage, RenderError>;

    /// MIME type of the produced bytes.
    fn media_type(&self) -> &'static str;
}

/// Encoded card image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedImage {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl RenderedImage {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }

    /// The bytes as text, for markup-based encodings such as SVG.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// Errors that can occur while rendering a card.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// A field the backend needs is missing from the layout.
    #[error("Missing card field: {0}")]
    MissingField(String),

    /// Encoding failed inside the backend.
    #[error("Rendering failed: {0}")]
    Backend(String),
}

impl RenderError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_image_exposes_utf8_text() {
        let image = RenderedImage::new("image/svg+xml", b"<svg/>".to_vec());
        assert_eq!(image.as_text(), Some("<svg/>"));
    }

    #[test]
    fn binary_image_has_no_text_view() {
        let image = RenderedImage::new("image/png", vec![0x89, 0xff, 0xfe]);
        assert!(image.as_text().is_none());
    }

    #[test]
    fn render_error_displays_field() {
        let err = RenderError::missing_field("meaning");
        assert!(err.to_string().contains("meaning"));
    }

    #[test]
    fn image_renderer_is_object_safe() {
        fn check<T: ImageRenderer + ?Sized>() {}
        check::<dyn ImageRenderer>();
    }
}
