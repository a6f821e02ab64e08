//! Primer Core - Fundamental types
//!
//! This crate provides the core types used throughout Primer:
//! - `Value`: Runtime values (numbers, text, booleans, null)
//! - `PrimerError`: Structured errors with machine-readable codes

mod error;
mod value;

pub use error::{codes, PrimerError, Severity};
pub use value::Value;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{PrimerError, Severity, Value};
}
