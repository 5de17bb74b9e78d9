//! LotusGuess - decide with flowers.
//!
//! A question is classified by shape, a handful of flowers is drawn from a
//! fixed catalog, and the flower the user picks answers it. The result is a
//! shareable card and text, optionally registered with a record service.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
