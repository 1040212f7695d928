use hourscope_types::{AnalysisResult, HOURS_PER_DAY};

/// Highest hourly count, or 0 for an empty histogram.
pub fn max_post_count(counts: &[u64]) -> u64 {
    counts.iter().copied().max().unwrap_or(0)
}

/// Every hour whose count equals the maximum, in ascending order.
///
/// Ties are all reported. An empty histogram has no optimal hours.
pub fn optimal_hours(counts: &[u64]) -> Vec<usize> {
    if counts.is_empty() {
        return Vec::new();
    }
    let max = max_post_count(counts);
    counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count == max)
        .map(|(hour, _)| hour)
        .collect()
}

/// Build a consistent result from a 24-bucket histogram.
///
/// Returns `None` when `counts` does not have exactly [`HOURS_PER_DAY`]
/// entries.
pub fn derive_result(
    subreddit: impl Into<String>,
    timezone: impl Into<String>,
    counts: Vec<u64>,
) -> Option<AnalysisResult> {
    if counts.len() != HOURS_PER_DAY {
        return None;
    }
    Some(AnalysisResult {
        subreddit: subreddit.into(),
        timezone: timezone.into(),
        optimal_hours: optimal_hours(&counts),
        max_post_count: max_post_count(&counts),
        hourly_post_counts: counts,
        previous_analysis: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_with(prefix: &[u64]) -> Vec<u64> {
        let mut counts = vec![0; HOURS_PER_DAY];
        counts[..prefix.len()].copy_from_slice(prefix);
        counts
    }

    #[test]
    fn test_ties_are_all_reported() {
        let counts = counts_with(&[5, 5, 3]);
        assert_eq!(max_post_count(&counts), 5);
        assert_eq!(optimal_hours(&counts), vec![0, 1]);
    }

    #[test]
    fn test_single_peak() {
        let mut counts = vec![1; HOURS_PER_DAY];
        counts[17] = 40;
        assert_eq!(optimal_hours(&counts), vec![17]);
    }

    #[test]
    fn test_all_zero_marks_every_hour() {
        let counts = vec![0; HOURS_PER_DAY];
        assert_eq!(max_post_count(&counts), 0);
        assert_eq!(optimal_hours(&counts).len(), HOURS_PER_DAY);
    }

    #[test]
    fn test_derive_result_rejects_wrong_length() {
        assert!(derive_result("rust", "UTC", vec![1; 23]).is_none());

        let result = derive_result("rust", "UTC", counts_with(&[2, 9, 9])).unwrap();
        assert_eq!(result.max_post_count, 9);
        assert_eq!(result.optimal_hours, vec![1, 2]);
        assert!(result.previous_analysis.is_none());
    }
}
