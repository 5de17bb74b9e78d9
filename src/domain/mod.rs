//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, errors, state machines)
//! - `catalog` - The fixed set of flower options and their meanings
//! - `decision` - Question classification, option sampling and the session state machine
//! - `result` - Result card layout, share text and record metadata

pub mod catalog;
pub mod decision;
pub mod foundation;
pub mod result;
