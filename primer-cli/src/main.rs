//! Primer interactive demo
//!
//! Greets the user by time of day, generates a Fibonacci sequence of a
//! requested length, and prints the sequence's aggregate properties and
//! golden-ratio convergence.
//!
//! Configuration is environment-based:
//! - `RUST_LOG`: log filter (defaults to `info`, logs go to stderr)
//! - `PRIMER_MAX_TERMS`: display clamp for the term count (default 50)
//! - `PRIMER_OUTPUT=json`: additionally emit the analysis as JSON
//!
//! Exit codes: 0 success, 130 interrupted input, 1 anything else.

mod input;
mod render;
mod system;

use chrono::Timelike;
use input::{parse_term_count, prompt, TermCountError};
use primer_core::{codes, PrimerError, Value};
use primer_sequence::{analyze, generate};
use std::env;
use std::io::{self, BufRead, Write};
use std::process;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_NAME: &str = "World";
const DEFAULT_TERMS: i64 = 15;
const DEFAULT_MAX_DISPLAY_TERMS: i64 = 50;

/// Display clamp for the requested term count. The generator itself is
/// uncapped; this only bounds what the demo prints.
fn max_display_terms() -> i64 {
    env::var("PRIMER_MAX_TERMS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_DISPLAY_TERMS)
}

fn json_output() -> bool {
    env::var("PRIMER_OUTPUT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn main() {
    // Initialize logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match run(&mut input, &mut output) {
        Ok(()) => process::exit(0),
        Err(e) if e.code == codes::INPUT_CANCELLED => {
            tracing::warn!("input interrupted by user");
            process::exit(130);
        }
        Err(e) => {
            tracing::error!(code = %e.code, "{}", e.message);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), PrimerError> {
    writeln!(output, "{}", render::banner()).map_err(io_err)?;
    writeln!(output, "{}", system::system_info_block(VERSION)).map_err(io_err)?;

    writeln!(output, "\n{}", render::section_header("USER INPUT SECTION")).map_err(io_err)?;

    let name = prompt(input, output, "Please enter your name", DEFAULT_NAME)?;
    let hour = chrono::Local::now().hour();
    let greeting = primer_greet::greet(&Value::from(name.as_str()), hour)?;
    writeln!(output, "\n{}", greeting).map_err(io_err)?;

    let raw = prompt(
        input,
        output,
        "Enter number of Fibonacci terms to calculate",
        &DEFAULT_TERMS.to_string(),
    )?;
    let requested = match parse_term_count(&raw) {
        Ok(n) => n,
        Err(TermCountError::NonNumeric) => {
            writeln!(output, "Invalid number. Using default value ({}).", DEFAULT_TERMS)
                .map_err(io_err)?;
            DEFAULT_TERMS
        }
        Err(TermCountError::NonPositive) => {
            writeln!(output, "Invalid input. Using default value ({}).", DEFAULT_TERMS)
                .map_err(io_err)?;
            DEFAULT_TERMS
        }
    };

    // Limit to reasonable size for display
    let term_count = requested.min(max_display_terms());
    if term_count < requested {
        tracing::debug!(requested, term_count, "clamped term count for display");
    }

    let terms = generate(term_count)?;
    let analysis = analyze(&terms)?;
    tracing::info!(terms = terms.len(), "sequence generated and analyzed");

    writeln!(output, "\n{}", render::render_demo(&terms, &analysis)).map_err(io_err)?;

    if json_output() {
        let json =
            serde_json::to_string_pretty(&analysis).map_err(|e| PrimerError::internal(e.to_string()))?;
        writeln!(output, "\n{}", json).map_err(io_err)?;
    }

    writeln!(output, "\n{}", render::render_summary(&name, &terms)).map_err(io_err)?;
    Ok(())
}

fn io_err(e: io::Error) -> PrimerError {
    PrimerError::io_error(e.to_string())
}
