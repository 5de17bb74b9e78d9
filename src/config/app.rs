//! Application-level configuration: public origin and sharing.

use serde::Deserialize;

use super::error::ValidationError;
use super::is_http_url;
use crate::domain::result::{ShareSettings, DEFAULT_COMPOSE_URL, DEFAULT_SHARE_SUFFIX};

/// App configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
    /// Public origin of the app; appears in shares and record references
    #[serde(default = "default_origin_url")]
    pub origin_url: String,

    /// Promotional line appended to share text
    #[serde(default = "default_share_suffix")]
    pub share_suffix: String,

    /// Social compose endpoint for share deep links
    #[serde(default = "default_compose_url")]
    pub compose_url: String,

    /// Fixed seed for reproducible flower draws
    pub random_seed: Option<u64>,
}

impl AppSection {
    pub fn share_settings(&self) -> ShareSettings {
        ShareSettings::new(self.origin_url.clone())
            .with_suffix(self.share_suffix.clone())
            .with_compose_url(self.compose_url.clone())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.origin_url) {
            return Err(ValidationError::InvalidUrl { field: "app.origin_url" });
        }
        if !is_http_url(&self.compose_url) {
            return Err(ValidationError::InvalidUrl { field: "app.compose_url" });
        }
        Ok(())
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            origin_url: default_origin_url(),
            share_suffix: default_share_suffix(),
            compose_url: default_compose_url(),
            random_seed: None,
        }
    }
}

fn default_origin_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_share_suffix() -> String {
    DEFAULT_SHARE_SUFFIX.to_string()
}

fn default_compose_url() -> String {
    DEFAULT_COMPOSE_URL.to_string()
}
