use log::warn;

use super::{MicroBenchmarkComparison, MicroBenchmarkDetails};

/// Ratio reported for benchmarks that have no baseline to compare against.
pub const NO_BASELINE_RATIO: f64 = 1.00;

/// Merges a current result set with a baseline result set.
#[derive(Debug, Default, Clone, Copy)]
pub struct Comparator;

impl Comparator {
    /// Compare every current result with the first baseline result sharing
    /// its [`BenchmarkId`](super::BenchmarkId).
    ///
    /// The output follows the order of `current` and has exactly one entry
    /// per current result. Benchmarks only present in the baseline are
    /// dropped.
    pub fn compare(
        &self,
        current: &[MicroBenchmarkDetails],
        baseline: &[MicroBenchmarkDetails],
    ) -> Vec<MicroBenchmarkComparison> {
        current
            .iter()
            .map(|details| {
                let last = baseline.iter().find(|last| last.id == details.id);
                let ratio = match last {
                    Some(last) => {
                        let ratio =
                            ns_per_op_ratio(last.result.ns_per_op, details.result.ns_per_op);
                        if ratio.is_none() {
                            warn!(
                                "Benchmark {}/{} has a zero time per operation, ratio is undefined",
                                details.id.package_name, details.id.name
                            );
                        }
                        ratio
                    }
                    None => Some(NO_BASELINE_RATIO),
                };

                MicroBenchmarkComparison {
                    id: details.id.clone(),
                    current: details.result,
                    baseline: last.map(|last| last.result),
                    ratio,
                }
            })
            .collect()
    }
}

fn ns_per_op_ratio(baseline_ns_per_op: f64, current_ns_per_op: f64) -> Option<f64> {
    if current_ns_per_op == 0.0 {
        return None;
    }
    Some(baseline_ns_per_op / current_ns_per_op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::test_helpers::details;

    #[test]
    fn test_faster_current_has_ratio_above_one() {
        let current = vec![details("pkg", "A", 100.0)];
        let baseline = vec![details("pkg", "A", 150.0)];

        let comparisons = Comparator.compare(&current, &baseline);
        assert_eq!(comparisons.len(), 1);
        assert_eq!(comparisons[0].ratio, Some(1.5));
        assert_eq!(comparisons[0].current.ns_per_op, 100.0);
        assert_eq!(comparisons[0].baseline.unwrap().ns_per_op, 150.0);
    }

    #[test]
    fn test_slower_current_has_ratio_below_one() {
        let current = vec![details("pkg", "A", 200.0)];
        let baseline = vec![details("pkg", "A", 100.0)];

        let comparisons = Comparator.compare(&current, &baseline);
        assert_eq!(comparisons[0].ratio, Some(0.5));
    }

    #[test]
    fn test_missing_baseline() {
        let current = vec![details("pkg", "B", 100.0)];

        let comparisons = Comparator.compare(&current, &[]);
        assert_eq!(comparisons.len(), 1);
        assert_eq!(comparisons[0].ratio, Some(NO_BASELINE_RATIO));
        assert_eq!(comparisons[0].baseline, None);
    }

    #[test]
    fn test_zero_current_time_is_undefined() {
        let current = vec![details("pkg", "A", 0.0)];
        let baseline = vec![details("pkg", "A", 150.0)];

        let comparisons = Comparator.compare(&current, &baseline);
        assert_eq!(comparisons[0].ratio, None);
        assert!(comparisons[0].baseline.is_some());
    }

    #[test]
    fn test_matches_on_full_identity() {
        let current = vec![details("pkg/a", "A", 100.0)];
        let baseline = vec![details("pkg/b", "A", 150.0)];

        let comparisons = Comparator.compare(&current, &baseline);
        assert_eq!(comparisons[0].baseline, None);
        assert_eq!(comparisons[0].ratio, Some(NO_BASELINE_RATIO));
    }

    #[test]
    fn test_first_baseline_match_wins() {
        let current = vec![details("pkg", "A", 100.0)];
        let baseline = vec![details("pkg", "A", 300.0), details("pkg", "A", 200.0)];

        let comparisons = Comparator.compare(&current, &baseline);
        assert_eq!(comparisons[0].ratio, Some(3.0));
    }

    #[test]
    fn test_preserves_current_order_and_cardinality() {
        let current = vec![
            details("pkg", "C", 10.0),
            details("pkg", "A", 10.0),
            details("pkg", "B", 10.0),
        ];
        let baseline = vec![
            details("pkg", "A", 20.0),
            details("pkg", "D", 20.0),
            details("pkg", "C", 5.0),
        ];

        let comparisons = Comparator.compare(&current, &baseline);
        let summary = comparisons
            .iter()
            .map(|c| (c.id.name.as_str(), c.ratio))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![("C", Some(0.5)), ("A", Some(2.0)), ("B", Some(1.0))]
        );
    }
}
