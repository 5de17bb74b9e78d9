//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RandomSource` - uniform draws for sampling and open-ended sizing
//! - `ImageRenderer` - encodes a composed result card
//! - `RecordEmitter` - registers a finished decision with an issuance service

mod image_renderer;
mod random_source;
mod record_emitter;

pub use image_renderer::{ImageRenderer, RenderError, RenderedImage};
pub use random_source::RandomSource;
pub use record_emitter::{EmitError, RecordEmitter, RecordReceipt, RecordRequest, RecordResponse};
