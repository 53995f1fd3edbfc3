use itertools::Itertools;

/// Median of `values`, or `None` when there are no values.
///
/// With an even number of values the two middle ones are averaged.
pub fn median(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let sorted = values
        .into_iter()
        .sorted_by(|a, b| a.total_cmp(b))
        .collect::<Vec<f64>>();

    let len = sorted.len();
    if len == 0 {
        return None;
    }

    let mid = len / 2;
    if len % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Median of integer counts, truncated to an integer when the two middle
/// values are averaged.
///
/// Stays in `u64` so counts above 2^53 are not rounded.
pub fn median_u64(values: impl IntoIterator<Item = u64>) -> Option<u64> {
    let sorted = values.into_iter().sorted().collect::<Vec<u64>>();

    let len = sorted.len();
    if len == 0 {
        return None;
    }

    let mid = len / 2;
    if len % 2 == 0 {
        let (a, b) = (sorted[mid - 1], sorted[mid]);
        Some(a / 2 + b / 2 + (a % 2 + b % 2) / 2)
    } else {
        Some(sorted[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_count() {
        assert_eq!(median([10.0, 20.0, 30.0]), Some(20.0));
        assert_eq!(median([30.0, 10.0, 20.0]), Some(20.0));
    }

    #[test]
    fn test_even_count() {
        assert_eq!(median([10.0, 20.0]), Some(15.0));
        assert_eq!(median([40.0, 10.0, 30.0, 20.0]), Some(25.0));
    }

    #[test]
    fn test_single_value() {
        assert_eq!(median([42.5]), Some(42.5));
    }

    #[test]
    fn test_empty() {
        assert_eq!(median(std::iter::empty()), None);
        assert_eq!(median_u64(std::iter::empty()), None);
    }

    #[test]
    fn test_integer_median_truncates() {
        assert_eq!(median_u64([10, 20, 30]), Some(20));
        assert_eq!(median_u64([10, 21]), Some(15));
        assert_eq!(median_u64([1, 2]), Some(1));
        assert_eq!(median_u64([3, 5]), Some(4));
    }

    #[test]
    fn test_integer_median_keeps_large_counts_exact() {
        let large = (1u64 << 53) + 1;
        assert_eq!(median_u64([large]), Some(large));
        assert_eq!(median_u64([large, large + 2]), Some(large + 1));
        assert_eq!(median_u64([u64::MAX, u64::MAX]), Some(u64::MAX));
        assert_eq!(median_u64([u64::MAX - 1, u64::MAX]), Some(u64::MAX - 1));
    }
}
