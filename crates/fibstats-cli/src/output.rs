//! Text formatting helpers.

use num_bigint::BigUint;

use fibstats_core::{Average, SequenceStats};

/// Rendering of an absent statistic.
pub const ABSENT: &str = "None";

/// Format an optional mean, e.g. `1.4`, `0.0` or `None`.
#[must_use]
pub fn format_average(average: Option<&Average>) -> String {
    average.map_or_else(|| ABSENT.to_string(), ToString::to_string)
}

/// Format an optional integer statistic.
#[must_use]
pub fn format_optional(value: Option<&BigUint>) -> String {
    value.map_or_else(|| ABSENT.to_string(), ToString::to_string)
}

/// Format a sequence as a bracketed list: `[0, 1, 1, 2, 3]`.
#[must_use]
pub fn format_sequence(values: &[BigUint]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Summary line for one count: `n=<n>: length=<length>, average=<average>`.
#[must_use]
pub fn format_stats_line(n: i64, stats: &SequenceStats) -> String {
    format!(
        "n={n}: length={}, average={}",
        stats.length,
        format_average(stats.average.as_ref())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibstats_core::stats;

    #[test]
    fn average_absent() {
        assert_eq!(format_average(None), "None");
    }

    #[test]
    fn average_present() {
        assert_eq!(format_average(stats(5).average.as_ref()), "1.4");
        assert_eq!(format_average(stats(1).average.as_ref()), "0.0");
    }

    #[test]
    fn optional_values() {
        assert_eq!(format_optional(None), "None");
        assert_eq!(format_optional(Some(&BigUint::from(34u32))), "34");
    }

    #[test]
    fn sequence_list() {
        assert_eq!(format_sequence(&[]), "[]");
        assert_eq!(format_sequence(&stats(5).sequence), "[0, 1, 1, 2, 3]");
    }

    #[test]
    fn demo_lines() {
        assert_eq!(format_stats_line(0, &stats(0)), "n=0: length=0, average=None");
        assert_eq!(format_stats_line(1, &stats(1)), "n=1: length=1, average=0.0");
        assert_eq!(format_stats_line(5, &stats(5)), "n=5: length=5, average=1.4");
        assert_eq!(format_stats_line(10, &stats(10)), "n=10: length=10, average=8.8");
    }

    #[test]
    fn large_average_line() {
        assert_eq!(
            format_stats_line(93, &stats(93)),
            "n=93: length=93, average=2.1226101311686262e+17"
        );
        assert_eq!(
            format_stats_line(2000, &stats(2000)),
            "n=2000: length=2000, average=inf"
        );
    }

    #[test]
    fn negative_count_line() {
        assert_eq!(format_stats_line(-4, &stats(-4)), "n=-4: length=0, average=None");
    }
}
