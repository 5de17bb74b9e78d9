//! Record Emitter Adapters.
//!
//! - `HttpRecordEmitter` - posts records to a remote issuance service with
//!   a timeout and bounded retries
//! - `LocalRecordIssuer` - issues records in-process and keeps their metadata
//!   in memory

mod http_emitter;
mod local_issuer;

pub use http_emitter::{HttpRecordEmitter, HttpRecordEmitterConfig};
pub use local_issuer::{LocalRecordIssuer, MAX_RECORD_ID};
