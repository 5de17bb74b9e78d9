//! EmitRecord - hands a result to the record emitter.

use std::sync::Arc;

use tracing::warn;

use crate::domain::result::ResultArtifact;
use crate::ports::{EmitError, RecordEmitter, RecordReceipt, RecordRequest};

/// Command to record a result.
#[derive(Debug, Clone)]
pub struct EmitRecordCommand {
    /// Opaque account reference of the requester.
    pub user_ref: String,
}

/// Handler for emitting records.
pub struct EmitRecordHandler {
    emitter: Arc<dyn RecordEmitter>,
}

impl EmitRecordHandler {
    pub fn new(emitter: Arc<dyn RecordEmitter>) -> Self {
        Self { emitter }
    }

    /// Emits a record for `artifact` and attaches the returned references.
    ///
    /// On failure the artifact is left without a reference.
    pub async fn handle(
        &self,
        artifact: &mut ResultArtifact,
        cmd: EmitRecordCommand,
    ) -> Result<RecordReceipt, EmitError> {
        let request = artifact.record_request(cmd.user_ref);
        let receipt = self.submit(&request).await?;
        artifact.attach_record(receipt.clone());
        Ok(receipt)
    }

    /// Emits a record for a request that did not come from a local session.
    pub async fn submit(&self, request: &RecordRequest) -> Result<RecordReceipt, EmitError> {
        self.emitter.emit(request).await.map_err(|err| {
            warn!(error = %err, "Record emit failed");
            err
        })
    }
}
