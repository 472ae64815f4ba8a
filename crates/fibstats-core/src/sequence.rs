//! Iterative Fibonacci sequence generator.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::constants::PREALLOC_LIMIT;

/// Return the first `n` Fibonacci numbers, starting from F(0) = 0.
///
/// Non-positive counts yield an empty sequence. Values are arbitrary
/// precision, so there is no overflow bound on `n`.
///
/// # Example
/// ```
/// let fibs: Vec<String> = fibstats_core::sequence(7).iter().map(ToString::to_string).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// assert!(fibstats_core::sequence(-3).is_empty());
/// ```
#[must_use]
pub fn sequence(n: i64) -> Vec<BigUint> {
    if n <= 0 {
        debug!(n, "non-positive count, returning empty sequence");
        return Vec::new();
    }
    let count = usize::try_from(n).unwrap_or(usize::MAX);

    let mut values = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    let mut a = BigUint::zero();
    let mut b = BigUint::one();

    for _ in 0..count {
        let next = &a + &b;
        let current = std::mem::replace(&mut a, std::mem::replace(&mut b, next));
        values.push(current);
    }

    debug!(n, length = values.len(), "generated Fibonacci sequence");
    values
}
