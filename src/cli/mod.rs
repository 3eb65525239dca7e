//! # rowcodec CLI Module
//!
//! Support code for the `rowcodec` binary: argument parsing, JSON input, and
//! ASCII table output. The binary itself only installs logging and prints
//! what `execute` returns.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              CLI Entry Point                  │
//! │            (bin/rowcodec.rs)                  │
//! ├──────────────────────────────────────────────┤
//! │          Command::parse + execute             │
//! ├───────────────┬──────────────────────────────┤
//! │  JSON → Row   │  Table Formatter / hex dump   │
//! └───────────────┴──────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! rowcodec encode '{"UserId": 42, "Name": "John Doe"}'
//! rowcodec explain '{"City": "Café"}'
//! rowcodec decode 010000000200000049640101000000
//! ```

pub mod commands;
pub mod json;
pub mod table;

pub use commands::{execute, Command, Input};
pub use table::TableFormatter;
