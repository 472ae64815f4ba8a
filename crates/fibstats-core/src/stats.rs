//! Descriptive statistics over a generated Fibonacci sequence.

use std::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use tracing::debug;

use crate::sequence::sequence;

/// Significant bits kept in the scaled quotient used by [`Average::to_f64`].
const QUOTIENT_BITS: u64 = 64;

/// Exact arithmetic mean of a non-empty sequence, kept as a reduced fraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Average {
    numer: BigUint,
    denom: BigUint,
}

impl Average {
    /// Build the mean `sum / count`, reduced to lowest terms.
    ///
    /// Returns `None` when `count` is zero.
    #[must_use]
    pub fn new(sum: BigUint, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let count = BigUint::from(count);
        let gcd = sum.gcd(&count);
        Some(Self {
            numer: sum / &gcd,
            denom: count / gcd,
        })
    }

    /// Numerator of the reduced fraction.
    #[must_use]
    pub fn numer(&self) -> &BigUint {
        &self.numer
    }

    /// Denominator of the reduced fraction (never zero).
    #[must_use]
    pub fn denom(&self) -> &BigUint {
        &self.denom
    }

    /// Nearest `f64` to the exact mean.
    ///
    /// Means beyond the `f64` range saturate to infinity.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let exact = self.numer.bits() <= u64::from(f64::MANTISSA_DIGITS)
            && self.denom.bits() <= u64::from(f64::MANTISSA_DIGITS);
        if exact {
            // Both operands are exactly representable, so IEEE division rounds once.
            return to_f64(&self.numer) / to_f64(&self.denom);
        }

        let shift = (QUOTIENT_BITS + self.denom.bits()).saturating_sub(self.numer.bits());
        let (mut quotient, remainder) = (&self.numer << shift).div_rem(&self.denom);
        if !remainder.is_zero() {
            // Sticky bit so the final rounding sees the discarded remainder.
            quotient |= BigUint::one();
        }
        let scaled = to_f64(&quotient);
        match i32::try_from(shift) {
            Ok(shift) => scaled * 2f64.powi(-shift),
            Err(_) => 0.0,
        }
    }
}

fn to_f64(value: &BigUint) -> f64 {
    value.to_f64().unwrap_or(f64::INFINITY)
}

impl fmt::Display for Average {
    /// Formats the mean as a float, always with a fractional part (`1.4`, `0.0`).
    ///
    /// Positive exponents carry an explicit sign (`2.1226101311686262e+17`) and
    /// a mean beyond the `f64` range renders as `inf`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:?}", self.to_f64());
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&text),
        }
    }
}

/// Statistics for the first `length` Fibonacci numbers.
///
/// `average`, `maximum` and `minimum` are `None` exactly when `length` is 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceStats {
    /// The sequence the statistics were computed over.
    pub sequence: Vec<BigUint>,
    /// Number of elements.
    pub length: usize,
    /// Arithmetic mean.
    pub average: Option<Average>,
    /// Largest element.
    pub maximum: Option<BigUint>,
    /// Smallest element.
    pub minimum: Option<BigUint>,
}

impl SequenceStats {
    /// Statistics of an empty sequence.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sequence: Vec::new(),
            length: 0,
            average: None,
            maximum: None,
            minimum: None,
        }
    }

    /// Compute statistics over an arbitrary sequence.
    #[must_use]
    pub fn from_sequence(sequence: Vec<BigUint>) -> Self {
        if sequence.is_empty() {
            return Self::empty();
        }

        let length = sequence.len();
        let sum: BigUint = sequence.iter().sum();
        let maximum = sequence.iter().max().cloned();
        let minimum = sequence.iter().min().cloned();

        Self {
            average: Average::new(sum, length),
            maximum,
            minimum,
            length,
            sequence,
        }
    }

    /// Whether the underlying sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl Default for SequenceStats {
    fn default() -> Self {
        Self::empty()
    }
}

/// Return descriptive statistics of the first `n` Fibonacci numbers.
///
/// Non-positive counts produce [`SequenceStats::empty`].
///
/// # Example
/// ```
/// let s = fibstats_core::stats(5);
/// assert_eq!(s.length, 5);
/// assert_eq!(s.average.unwrap().to_f64(), 1.4);
/// assert!(fibstats_core::stats(0).average.is_none());
/// ```
#[must_use]
pub fn stats(n: i64) -> SequenceStats {
    let result = SequenceStats::from_sequence(sequence(n));
    debug!(n, length = result.length, "computed sequence statistics");
    result
}
