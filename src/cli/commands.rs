//! # Command Handler
//!
//! Parses `rowcodec` arguments and runs the selected command.
//!
//! ## Supported Commands
//!
//! | Command | Input | Output |
//! |---------|-------|--------|
//! | `encode <JSON\|->` | JSON object | encoded row as hex |
//! | `explain <JSON\|->` | JSON object | segment table, total size, hex dump |
//! | `decode <HEX\|->` | hex bytes | `column \| type \| value` table |
//!
//! `-` reads the input from stdin. Hex input may contain whitespace.
//!
//! ## Implementation
//!
//! `execute` returns the text to print instead of writing it, so every
//! command can be tested without capturing stdout.

use std::fmt::Write as _;
use std::io::Read;

use eyre::{bail, ensure, eyre, Result, WrapErr};

use crate::cli::json::parse_row;
use crate::cli::table::TableFormatter;
use crate::records::{decode_prefix, encode, explain, hex_dump};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Inline(String),
    Stdin,
}

impl Input {
    fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Input::Stdin
        } else {
            Input::Inline(arg.to_string())
        }
    }

    fn read(&self, stdin: &mut impl Read) -> Result<String> {
        match self {
            Input::Inline(text) => Ok(text.clone()),
            Input::Stdin => {
                let mut text = String::new();
                stdin
                    .read_to_string(&mut text)
                    .wrap_err("failed to read input from stdin")?;
                Ok(text)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Encode(Input),
    Explain(Input),
    Decode(Input),
    Help,
    Version,
}

impl Command {
    /// Parses the arguments after the program name.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Command> {
        let Some(first) = args.first() else {
            return Ok(Command::Help);
        };

        let command = first.as_ref();
        match command {
            "--help" | "-h" | "help" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            arg if arg.starts_with('-') && arg != "-" => bail!("Unknown option: {}", arg),
            _ => {}
        }

        ensure!(
            args.len() == 2,
            "'{}' takes exactly one input argument (use '-' for stdin)",
            command
        );
        let input = Input::from_arg(args[1].as_ref());

        match command {
            "encode" => Ok(Command::Encode(input)),
            "explain" => Ok(Command::Explain(input)),
            "decode" => Ok(Command::Decode(input)),
            other => bail!("Unknown command: {}. Run 'rowcodec --help' for usage.", other),
        }
    }
}

pub fn execute(command: &Command, stdin: &mut impl Read) -> Result<String> {
    match command {
        Command::Help => Ok(usage()),
        Command::Version => Ok(format!("rowcodec {}\n", env!("CARGO_PKG_VERSION"))),
        Command::Encode(input) => run_encode(&input.read(stdin)?),
        Command::Explain(input) => run_explain(&input.read(stdin)?),
        Command::Decode(input) => run_decode(&input.read(stdin)?),
    }
}

fn run_encode(json: &str) -> Result<String> {
    let row = parse_row(json)?;
    let bytes = encode(&row).wrap_err("failed to encode row")?;
    Ok(format!("{}\n", to_hex(&bytes)))
}

fn run_explain(json: &str) -> Result<String> {
    let row = parse_row(json)?;
    let (data, segments) = explain(&row).wrap_err("failed to encode row")?;

    let mut out = TableFormatter::for_segments(&segments, &data).render();
    let _ = writeln!(out, "Total size: {} bytes", data.len());
    out.push_str(&hex_dump(&data));
    Ok(out)
}

fn run_decode(hex: &str) -> Result<String> {
    let bytes = parse_hex(hex)?;
    let (row, consumed) = decode_prefix(&bytes).wrap_err("failed to decode row")?;

    let mut out = TableFormatter::for_row(&row).render();
    let _ = writeln!(
        out,
        "{} column{} in {} bytes",
        row.len(),
        if row.len() == 1 { "" } else { "s" },
        consumed
    );
    if consumed < bytes.len() {
        let _ = writeln!(out, "{} trailing bytes ignored", bytes.len() - consumed);
    }
    Ok(out)
}

/// Parses hex text, ignoring whitespace. Either case is accepted.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    ensure!(
        digits.len() % 2 == 0,
        "hex input has an odd number of digits ({})",
        digits.len()
    );

    digits
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| match (hex_digit(pair[0]), hex_digit(pair[1])) {
            (Some(high), Some(low)) => Ok((high << 4) | low),
            _ => Err(eyre!(
                "invalid hex digit in byte {} ('{}{}')",
                i,
                pair[0] as char,
                pair[1] as char
            )),
        })
        .collect()
}

pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{:02X}", b);
    }
    out
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

pub fn usage() -> String {
    r#"rowcodec - self-describing binary row codec

Usage:
  rowcodec encode <JSON|->     Encode a JSON object and print the row as hex
  rowcodec explain <JSON|->    Show the byte layout of an encoded JSON object
  rowcodec decode <HEX|->      Decode a hex-encoded row and print its columns
  rowcodec --help              Show this help message
  rowcodec --version           Show version

Use '-' to read the input from stdin. Set RUST_LOG=debug for decode diagnostics.

Examples:
  rowcodec encode '{"UserId": 42, "Name": "John Doe", "Active": true}'
  rowcodec encode '{"Id": 1}' | rowcodec decode -
"#
    .to_string()
}
