//! Interactive input with defaults
//!
//! Reads line-oriented input from any `BufRead` so tests can drive the
//! prompts with an in-memory cursor. EOF and blank input recover with
//! the default value; only a genuinely interrupted read surfaces as an
//! error.

use primer_core::PrimerError;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Low-level input failures
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input interrupted")]
    Interrupted,

    #[error("read failed: {0}")]
    Io(#[from] io::Error),
}

impl From<InputError> for PrimerError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::Interrupted => PrimerError::input_cancelled(),
            InputError::Io(e) => PrimerError::io_error(e.to_string()),
        }
    }
}

/// Term-count parsing failures, each with its own user-facing notice
#[derive(Debug, PartialEq, Eq, Error)]
pub enum TermCountError {
    #[error("not a number")]
    NonNumeric,

    #[error("not a positive number")]
    NonPositive,
}

/// Read one line through `fill_buf`/`consume`. `BufRead::read_line`
/// retries `ErrorKind::Interrupted` internally, which would swallow a
/// Ctrl+C delivered mid-read; reading the buffer directly lets the
/// interrupt surface as an error instead. Returns `None` at EOF.
fn read_line_raw<R: BufRead>(input: &mut R) -> Result<Option<String>, InputError> {
    let mut line = Vec::new();
    loop {
        let (done, used) = {
            let available = match input.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    return Err(InputError::Interrupted)
                }
                Err(e) => return Err(InputError::Io(e)),
            };
            if available.is_empty() {
                (true, 0)
            } else {
                match available.iter().position(|&b| b == b'\n') {
                    Some(pos) => {
                        line.extend_from_slice(&available[..=pos]);
                        (true, pos + 1)
                    }
                    None => {
                        line.extend_from_slice(available);
                        (false, available.len())
                    }
                }
            }
        };
        input.consume(used);
        if done {
            break;
        }
    }

    if line.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

/// Prompt for one line of input, substituting `default` when the user
/// enters nothing or the stream ends.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: &str,
) -> Result<String, InputError> {
    if default.is_empty() {
        write!(output, "{}: ", label)?;
    } else {
        write!(output, "{} [{}]: ", label, default)?;
    }
    output.flush()?;

    match read_line_raw(input)? {
        None => {
            // EOF: recover with the default, as an interactive cancel would
            writeln!(output, "\nInput cancelled, using default.")?;
            Ok(default.to_string())
        }
        Some(line) => {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                Ok(default.to_string())
            } else {
                Ok(trimmed.to_string())
            }
        }
    }
}

/// Parse a requested term count. The caller substitutes the default and
/// prints the matching notice on failure.
pub fn parse_term_count(raw: &str) -> Result<i64, TermCountError> {
    let n: i64 = raw.trim().parse().map_err(|_| TermCountError::NonNumeric)?;
    if n <= 0 {
        return Err(TermCountError::NonPositive);
    }
    Ok(n)
}
