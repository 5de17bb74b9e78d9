//! BuildResult - turns a selected session into a result artifact.

use std::sync::Arc;

use crate::domain::decision::DecisionSession;
use crate::domain::foundation::Timestamp;
use crate::domain::result::{CardContent, CardLayout, DecisionError, ResultArtifact, ShareSettings};
use crate::ports::{ImageRenderer, RenderError, RenderedImage};

/// Command to build a result.
#[derive(Debug, Clone, Copy)]
pub struct BuildResultCommand {
    /// Creation time stamped on the card.
    pub created_at: Timestamp,
}

/// Handler for building result artifacts.
pub struct BuildResultHandler {
    renderer: Arc<dyn ImageRenderer>,
    share: ShareSettings,
}

impl BuildResultHandler {
    pub fn new(renderer: Arc<dyn ImageRenderer>, share: ShareSettings) -> Self {
        Self { renderer, share }
    }

    pub fn share_settings(&self) -> &ShareSettings {
        &self.share
    }

    pub fn handle(
        &self,
        session: &DecisionSession,
        cmd: BuildResultCommand,
    ) -> Result<ResultArtifact, DecisionError> {
        ResultArtifact::build(session, cmd.created_at, self.renderer.as_ref(), &self.share)
    }

    /// Renders a card straight from content, without a session.
    pub fn render_card(&self, content: &CardContent) -> Result<RenderedImage, RenderError> {
        self.renderer.render(&CardLayout::compose(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::ScriptedRandom;
    use crate::adapters::render::SvgCardRenderer;
    use crate::domain::catalog::{OptionCatalog, OptionId};
    use crate::domain::decision::DecisionStage;

    struct FailingRenderer;

    impl ImageRenderer for FailingRenderer {
        fn render(&self, _layout: &CardLayout) -> Result<RenderedImage, RenderError> {
            Err(RenderError::backend("no canvas"))
        }

        fn media_type(&self) -> &'static str {
            "image/png"
        }
    }

    fn handler() -> BuildResultHandler {
        BuildResultHandler::new(
            Arc::new(SvgCardRenderer::new()),
            ShareSettings::new("http://localhost:3000"),
        )
    }

    fn command() -> BuildResultCommand {
        BuildResultCommand {
            created_at: Timestamp::from_unix_secs(1705314600).unwrap(),
        }
    }

    fn selected_session() -> DecisionSession {
        let mut session = DecisionSession::new();
        let mut random = ScriptedRandom::new(vec![0, 0]);
        session.ask("Should I go out today?", OptionCatalog::standard(), &mut random);
        let first = session.option_set().options()[0].id().clone();
        session.select(&first);
        session
    }

    #[test]
    fn builds_artifact_for_selected_session() {
        let session = selected_session();
        let artifact = handler().handle(&session, command()).unwrap();

        assert_eq!(artifact.question().as_str(), "Should I go out today?");
        assert_eq!(artifact.rendered_image().media_type, "image/svg+xml");
        assert!(artifact.share_text().contains("http://localhost:3000"));
    }

    #[test]
    fn empty_session_is_not_selected() {
        let err = handler()
            .handle(&DecisionSession::new(), command())
            .unwrap_err();
        assert!(matches!(err, DecisionError::NotSelected(DecisionStage::Empty)));
    }

    #[test]
    fn renderer_failure_surfaces() {
        let handler = BuildResultHandler::new(
            Arc::new(FailingRenderer),
            ShareSettings::new("http://localhost:3000"),
        );
        let err = handler.handle(&selected_session(), command()).unwrap_err();
        assert!(matches!(err, DecisionError::Render(_)));
    }

    #[test]
    fn renders_card_from_content() {
        let tulip = OptionCatalog::standard().get(&OptionId::new("tulip")).unwrap();
        let question = crate::domain::decision::Question::new("Repaint the kitchen?").unwrap();
        let content = CardContent::for_selection(&question, tulip, command().created_at);

        let image = handler().render_card(&content).unwrap();
        let svg = image.as_text().unwrap();
        assert!(svg.contains("Later"));
        assert!(svg.contains("Repaint the kitchen?"));
    }
}
