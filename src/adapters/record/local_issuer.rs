//! Local Record Issuer - issues records in-process.
//!
//! Assigns each record a random numeric id, stores its metadata in memory
//! and answers with the public metadata URL. Stands in for an on-chain
//! issuance service and backs the HTTP record endpoint by default.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::result::{record_metadata_url, result_image_url, RecordMetadata};
use crate::ports::{EmitError, RandomSource, RecordEmitter, RecordReceipt, RecordRequest};

/// Record ids are drawn from `0..MAX_RECORD_ID`.
pub const MAX_RECORD_ID: u32 = 1_000_000;

/// In-memory record issuer.
#[derive(Clone)]
pub struct LocalRecordIssuer {
    origin_url: String,
    random: Arc<Mutex<Box<dyn RandomSource>>>,
    records: Arc<RwLock<HashMap<u32, RecordMetadata>>>,
}

impl LocalRecordIssuer {
    pub fn new(origin_url: impl Into<String>, random: Box<dyn RandomSource>) -> Self {
        Self {
            origin_url: origin_url.into(),
            random: Arc::new(Mutex::new(random)),
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn origin_url(&self) -> &str {
        &self.origin_url
    }

    /// Metadata of an issued record.
    pub async fn metadata(&self, record_id: u32) -> Option<RecordMetadata> {
        self.records.read().await.get(&record_id).cloned()
    }

    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    fn draw_id(&self) -> u32 {
        let mut random = self.random.lock().unwrap_or_else(PoisonError::into_inner);
        random.next_index(MAX_RECORD_ID as usize) as u32
    }
}

impl std::fmt::Debug for LocalRecordIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalRecordIssuer")
            .field("origin_url", &self.origin_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RecordEmitter for LocalRecordIssuer {
    async fn emit(&self, request: &RecordRequest) -> Result<RecordReceipt, EmitError> {
        request.validate()?;

        let image_url = result_image_url(&self.origin_url, request)?;
        let metadata = RecordMetadata::describe(request, image_url.clone(), &self.origin_url);

        let mut records = self.records.write().await;
        if records.len() >= MAX_RECORD_ID as usize {
            return Err(EmitError::Rejected("record id space exhausted".to_string()));
        }
        let mut record_id = self.draw_id();
        while records.contains_key(&record_id) {
            record_id = (record_id + 1) % MAX_RECORD_ID;
        }
        records.insert(record_id, metadata);

        let external_ref = record_metadata_url(&self.origin_url, record_id);
        info!(record_id, external_ref = %external_ref, "Record issued");

        Ok(RecordReceipt {
            external_ref,
            rendered_image_ref: Some(image_url),
        })
    }
}
