//! HTTP Record Emitter - posts decisions to a remote issuance service.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpRecordEmitterConfig::new("https://records.example.com/api/records")
//!     .with_timeout(Duration::from_secs(5))
//!     .with_max_retries(2);
//!
//! let emitter = HttpRecordEmitter::new(config)?;
//! ```
//!
//! # Retries
//!
//! Timeouts, connection failures, 429 and 5xx answers are retried with
//! exponential backoff. A `success: false` answer is final.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::ports::{EmitError, RecordEmitter, RecordReceipt, RecordRequest, RecordResponse};

/// Configuration for the HTTP record emitter.
#[derive(Debug, Clone)]
pub struct HttpRecordEmitterConfig {
    /// Full URL the request body is posted to.
    pub endpoint_url: String,
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Retries after the first attempt for transient failures.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub backoff: Duration,
    /// Bearer token sent when the service requires one.
    api_token: Option<Secret<String>>,
}

impl HttpRecordEmitterConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            timeout: Duration::from_secs(5),
            max_retries: 2,
            backoff: Duration::from_secs(1),
            api_token: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(Secret::new(token.into()));
        self
    }

    fn api_token(&self) -> Option<&str> {
        self.api_token.as_ref().map(|t| t.expose_secret().as_str())
    }
}

/// Record emitter backed by a remote HTTP service.
#[derive(Debug, Clone)]
pub struct HttpRecordEmitter {
    config: HttpRecordEmitterConfig,
    client: Client,
}

impl HttpRecordEmitter {
    /// Creates the emitter and its HTTP client.
    ///
    /// # Errors
    ///
    /// - `Network` if the HTTP client cannot be built
    pub fn new(config: HttpRecordEmitterConfig) -> Result<Self, EmitError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EmitError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpRecordEmitterConfig {
        &self.config
    }

    async fn send_request(&self, request: &RecordRequest) -> Result<Response, EmitError> {
        let mut builder = self.client.post(&self.config.endpoint_url).json(request);
        if let Some(token) = self.config.api_token() {
            builder = builder.bearer_auth(token);
        }

        builder.send().await.map_err(|e| {
            if e.is_timeout() {
                EmitError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                EmitError::network(format!("Connection failed: {}", e))
            } else {
                EmitError::network(e.to_string())
            }
        })
    }

    async fn parse_response(&self, response: Response) -> Result<RecordReceipt, EmitError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                EmitError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else {
                EmitError::network(e.to_string())
            }
        })?;

        if status.is_success() {
            let parsed: RecordResponse = serde_json::from_str(&body)
                .map_err(|e| EmitError::invalid_response(e.to_string()))?;
            return parsed.into_receipt();
        }

        // A validation failure comes back as 400 with a `success: false` body.
        if status == StatusCode::BAD_REQUEST {
            if let Ok(parsed) = serde_json::from_str::<RecordResponse>(&body) {
                if !parsed.success {
                    return parsed.into_receipt();
                }
            }
        }

        Err(EmitError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }

    async fn attempt(&self, request: &RecordRequest) -> Result<RecordReceipt, EmitError> {
        let response = self.send_request(request).await?;
        self.parse_response(response).await
    }
}

#[async_trait]
impl RecordEmitter for HttpRecordEmitter {
    async fn emit(&self, request: &RecordRequest) -> Result<RecordReceipt, EmitError> {
        request.validate()?;

        let mut last_error = EmitError::network("No attempts made");
        let mut retry_count = 0;

        while retry_count <= self.config.max_retries {
            match self.attempt(request).await {
                Ok(receipt) => {
                    info!(
                        external_ref = %receipt.external_ref,
                        attempts = retry_count + 1,
                        "Record emitted"
                    );
                    return Ok(receipt);
                }
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    warn!(attempt = retry_count + 1, error = %err, "Record emit failed, retrying");
                    last_error = err;
                }
            }

            // Exponential backoff: base, 2×base, 4×base, ...
            sleep(self.config.backoff * (1u32 << retry_count.min(16))).await;
            retry_count += 1;
        }

        Err(last_error)
    }
}
