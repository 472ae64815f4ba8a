//! Constants shared by the library and the command-line front end.

/// Sequence lengths reported by the demonstration run.
pub const DEMO_COUNTS: [i64; 4] = [0, 1, 5, 10];

/// Upper bound on the up-front allocation made by the sequence generator.
///
/// Longer sequences still work; the buffer simply grows as values are pushed.
pub const PREALLOC_LIMIT: usize = 1 << 16;

/// Process exit codes.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A count argument could not be interpreted as an integer.
    pub const ERROR_INPUT: i32 = 2;
}
