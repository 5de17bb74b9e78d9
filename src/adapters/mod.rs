//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `random` - random sources (system entropy, scripted)
//! - `render` - result card renderers (SVG)
//! - `record` - record emitters (remote HTTP service, local issuer)
//! - `http` - axum routes serving cards and records

pub mod http;
pub mod random;
pub mod record;
pub mod render;

pub use random::{ScriptedRandom, SystemRandom};
pub use record::{HttpRecordEmitter, HttpRecordEmitterConfig, LocalRecordIssuer};
pub use render::SvgCardRenderer;
