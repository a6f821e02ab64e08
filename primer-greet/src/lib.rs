//! Primer Greet
//!
//! Greeting formatting: hour-of-day bucketing and name validation.

mod greeting;

pub use greeting::{greet, Daypart};
