//! # rowcodec CLI Entry Point
//!
//! Binary entry point for encoding, inspecting and decoding rows from the
//! shell.
//!
//! ## Usage
//!
//! ```bash
//! # Encode a JSON object as a hex row
//! rowcodec encode '{"UserId": 42, "Name": "John Doe", "Active": true}'
//!
//! # Show the byte layout of a row
//! rowcodec explain '{"City": "Café", "Country": "日本"}'
//!
//! # Decode a hex row read from stdin
//! rowcodec encode '{"Id": 1}' | rowcodec decode -
//!
//! # Show version
//! rowcodec --version
//! ```
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG` (default `warn`).

use eyre::Result;
use rowcodec::cli::{execute, Command};
use std::env;
use std::io::{self, Write};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = Command::parse(&args)?;
    tracing::debug!(?command, "running command");

    let output = execute(&command, &mut io::stdin().lock())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
