//! Result artifact: the portable outcome of a finished decision.

use serde::Serialize;

use super::errors::DecisionError;
use super::layout::{CardContent, CardLayout};
use super::share::{compose_link, share_text, ShareSettings};
use crate::domain::catalog::FlowerOption;
use crate::domain::decision::{DecisionSession, DecisionStage, Question};
use crate::domain::foundation::Timestamp;
use crate::ports::{ImageRenderer, RecordReceipt, RecordRequest, RenderedImage};

/// A built result.
///
/// Immutable after [`ResultArtifact::build`] except for the record references,
/// which are filled in by [`ResultArtifact::attach_record`] after a successful emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultArtifact {
    question: Question,
    selected_option: FlowerOption,
    created_at: Timestamp,
    rendered_image: RenderedImage,
    share_text: String,
    compose_link: String,
    external_ref: Option<String>,
    rendered_image_ref: Option<String>,
}

impl ResultArtifact {
    /// Builds the artifact for a session in `Selected`.
    ///
    /// # Errors
    ///
    /// - `NotSelected` if the session has no selection
    /// - `Render` if the renderer fails
    /// - `Validation` if the share settings cannot form a compose link
    pub fn build(
        session: &DecisionSession,
        created_at: Timestamp,
        renderer: &dyn ImageRenderer,
        share: &ShareSettings,
    ) -> Result<Self, DecisionError> {
        let (question, option) = match (session.stage(), session.question(), session.selected()) {
            (DecisionStage::Selected, Some(question), Some(option)) => (question, option),
            (stage, _, _) => return Err(DecisionError::NotSelected(stage)),
        };

        let layout = CardLayout::compose(&CardContent::for_selection(question, option, created_at));
        let rendered_image = renderer.render(&layout)?;
        let share_text = share_text(question, option, share);
        let compose_link = compose_link(&share_text, share)?;

        Ok(Self {
            question: question.clone(),
            selected_option: option.clone(),
            created_at,
            rendered_image,
            share_text,
            compose_link,
            external_ref: None,
            rendered_image_ref: None,
        })
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn selected_option(&self) -> &FlowerOption {
        &self.selected_option
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn rendered_image(&self) -> &RenderedImage {
        &self.rendered_image
    }

    pub fn share_text(&self) -> &str {
        &self.share_text
    }

    pub fn compose_link(&self) -> &str {
        &self.compose_link
    }

    pub fn external_ref(&self) -> Option<&str> {
        self.external_ref.as_deref()
    }

    pub fn rendered_image_ref(&self) -> Option<&str> {
        self.rendered_image_ref.as_deref()
    }

    pub fn is_recorded(&self) -> bool {
        self.external_ref.is_some()
    }

    /// Request body for handing this result to a record emitter.
    pub fn record_request(&self, user_ref: impl Into<String>) -> RecordRequest {
        RecordRequest {
            question: self.question.as_str().to_string(),
            answer: self.selected_option.meaning().to_string(),
            option_label: self.selected_option.label().to_string(),
            option_glyph: self.selected_option.glyph().to_string(),
            option_description: self.selected_option.description().to_string(),
            user_ref: user_ref.into(),
            timestamp: self.created_at,
        }
    }

    pub fn attach_record(&mut self, receipt: RecordReceipt) {
        self.external_ref = Some(receipt.external_ref);
        self.rendered_image_ref = receipt.rendered_image_ref;
    }
}
