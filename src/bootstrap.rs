//! Composition root: wires adapters into handlers from configuration.

use std::sync::Arc;

use tracing::info;

use crate::adapters::http::ResultAppState;
use crate::adapters::random::SystemRandom;
use crate::adapters::record::{HttpRecordEmitter, LocalRecordIssuer};
use crate::adapters::render::SvgCardRenderer;
use crate::application::handlers::{AskQuestionHandler, BuildResultHandler, EmitRecordHandler};
use crate::config::AppConfig;
use crate::domain::catalog::OptionCatalog;
use crate::ports::{EmitError, RandomSource, RecordEmitter};

/// Handlers shared by the interactive client and the HTTP surface.
#[derive(Clone)]
pub struct Services {
    pub ask: Arc<AskQuestionHandler>,
    pub build: Arc<BuildResultHandler>,
    pub emit: Arc<EmitRecordHandler>,
    /// Present when records are issued in-process.
    pub issuer: Option<LocalRecordIssuer>,
}

impl Services {
    /// Wires services with system randomness, seeded when configured.
    ///
    /// # Errors
    ///
    /// - `Network` if the remote record client cannot be built
    pub fn from_config(config: &AppConfig) -> Result<Self, EmitError> {
        let (draws, record_ids) = random_streams(config.app.random_seed);
        Self::with_random(config, Box::new(draws), Box::new(record_ids))
    }

    /// Wires services with explicit random sources for flower draws and
    /// local record ids.
    ///
    /// # Errors
    ///
    /// - `Network` if the remote record client cannot be built
    pub fn with_random(
        config: &AppConfig,
        draws: Box<dyn RandomSource>,
        record_ids: Box<dyn RandomSource>,
    ) -> Result<Self, EmitError> {
        let ask = AskQuestionHandler::new(OptionCatalog::standard(), draws);
        let build = BuildResultHandler::new(
            Arc::new(SvgCardRenderer::new()),
            config.app.share_settings(),
        );

        let (emitter, issuer): (Arc<dyn RecordEmitter>, Option<LocalRecordIssuer>) =
            match config.record.http_emitter() {
                Some(http) => {
                    info!(endpoint = %http.endpoint_url, "Records go to remote service");
                    (Arc::new(HttpRecordEmitter::new(http)?), None)
                }
                None => {
                    info!("Records are issued locally");
                    let issuer = LocalRecordIssuer::new(config.app.origin_url.clone(), record_ids);
                    (Arc::new(issuer.clone()), Some(issuer))
                }
            };

        Ok(Self {
            ask: Arc::new(ask),
            build: Arc::new(build),
            emit: Arc::new(EmitRecordHandler::new(emitter)),
            issuer,
        })
    }

    /// State for the HTTP router.
    pub fn result_state(&self) -> ResultAppState {
        let state = ResultAppState::new(self.build.clone(), self.emit.clone());
        match &self.issuer {
            Some(issuer) => state.with_issuer(issuer.clone()),
            None => state,
        }
    }
}

/// Flower-draw and record-id streams. A configured seed derives a distinct
/// seed for record ids so the two sequences stay independent.
fn random_streams(seed: Option<u64>) -> (SystemRandom, SystemRandom) {
    match seed {
        Some(seed) => (
            SystemRandom::seeded(seed),
            SystemRandom::seeded(seed.wrapping_add(1)),
        ),
        None => (SystemRandom::new(), SystemRandom::new()),
    }
}
