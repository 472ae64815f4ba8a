//! Serializable view of a statistics record.

use serde::Serialize;

use fibstats_core::{Average, SequenceStats};

/// JSON-friendly statistics record.
///
/// Big integers are rendered as decimal strings and absent statistics as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    /// Requested count.
    pub n: i64,
    /// Number of elements.
    pub length: usize,
    /// Mean as a float; `null` when absent or beyond the `f64` range.
    pub average: Option<f64>,
    /// Exact mean as a reduced fraction, e.g. `"7/5"`.
    pub average_exact: Option<String>,
    /// Largest element.
    pub maximum: Option<String>,
    /// Smallest element.
    pub minimum: Option<String>,
    /// The sequence itself.
    pub sequence: Vec<String>,
}

impl StatsReport {
    #[must_use]
    pub fn new(n: i64, stats: &SequenceStats) -> Self {
        Self {
            n,
            length: stats.length,
            average: stats.average.as_ref().map(Average::to_f64),
            average_exact: stats
                .average
                .as_ref()
                .map(|a| format!("{}/{}", a.numer(), a.denom())),
            maximum: stats.maximum.as_ref().map(ToString::to_string),
            minimum: stats.minimum.as_ref().map(ToString::to_string),
            sequence: stats.sequence.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibstats_core::stats;

    #[test]
    fn report_for_empty() {
        let report = StatsReport::new(0, &stats(0));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["length"], 0);
        assert!(json["average"].is_null());
        assert!(json["average_exact"].is_null());
        assert!(json["maximum"].is_null());
        assert!(json["minimum"].is_null());
        assert_eq!(json["sequence"], serde_json::json!([]));
    }

    #[test]
    fn report_for_five() {
        let report = StatsReport::new(5, &stats(5));
        assert_eq!(report.average, Some(1.4));
        assert_eq!(report.average_exact.as_deref(), Some("7/5"));
        assert_eq!(report.maximum.as_deref(), Some("3"));
        assert_eq!(report.minimum.as_deref(), Some("0"));
        assert_eq!(report.sequence, ["0", "1", "1", "2", "3"]);
    }

    #[test]
    fn saturated_average_is_null_with_exact_fraction() {
        let report = StatsReport::new(2000, &stats(2000));
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["average"].is_null());
        let exact = json["average_exact"].as_str().unwrap();
        assert!(exact.contains('/'));
        assert_eq!(json["length"], 2000);
    }

    #[test]
    fn large_values_stay_exact() {
        let report = StatsReport::new(101, &stats(101));
        assert_eq!(report.maximum.as_deref(), Some("354224848179261915075"));
    }
}
