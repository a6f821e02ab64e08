//! Primer Sequence
//!
//! The computational core: Fibonacci generation and the properties
//! analyzer. Both are pure functions; errors are structured
//! `PrimerError` values and the under-length case is an explicit
//! `Analysis::Insufficient` marker.

mod analysis;
mod fibonacci;

pub use analysis::{analyze, golden_ratio, Analysis, SequenceAnalysis};
pub use fibonacci::generate;
