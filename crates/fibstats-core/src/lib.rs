//! # fibstats-core
//!
//! Fibonacci sequence generation and descriptive statistics over the
//! generated sequence. Both entry points are pure: every call builds a fresh
//! result owned by the caller.

pub mod constants;
pub mod error;
pub mod sequence;
pub mod stats;

// Re-exports
pub use constants::{exit_codes, DEMO_COUNTS};
pub use error::{parse_count, StatsError};
pub use sequence::sequence;
pub use stats::{stats, Average, SequenceStats};
