//! # Configuration Module
//!
//! All wire-format sizes and limits live here so the encoder, decoder and
//! inspection tooling cannot drift apart.
//!
//! ## Module Organization
//!
//! - [`constants`]: Numeric configuration values with dependency documentation

pub mod constants;
pub use constants::*;
