use hourscope_engine::derive_result;
use hourscope_types::{AnalysisResult, HOURS_PER_DAY, PreviousAnalysis, SubredditSuggestion};

/// Histogram with a morning ramp and an evening peak at 20:00.
pub fn evening_peak_counts() -> Vec<u64> {
    vec![
        3, 2, 1, 1, 0, 1, 2, 4, 6, 7, 8, 9, 10, 10, 11, 12, 13, 15, 18, 21, 25, 19, 9, 5,
    ]
}

/// Two maxima at 00:00 and 01:00.
pub fn tied_counts() -> Vec<u64> {
    let mut counts = vec![0; HOURS_PER_DAY];
    counts[0] = 5;
    counts[1] = 5;
    counts[2] = 3;
    counts
}

pub fn sample_result(subreddit: &str, timezone: &str) -> AnalysisResult {
    derive_result(subreddit, timezone, evening_peak_counts()).expect("24 buckets")
}

pub fn result_with_previous(subreddit: &str, timezone: &str, previous_max: u64) -> AnalysisResult {
    let mut result = sample_result(subreddit, timezone);
    result.previous_analysis = Some(PreviousAnalysis {
        max_post_count: previous_max,
    });
    result
}

/// Build suggestions from `(name, title)` pairs.
pub fn suggestions(entries: &[(&str, &str)]) -> Vec<SubredditSuggestion> {
    entries
        .iter()
        .map(|(name, title)| SubredditSuggestion::new(*name, *title))
        .collect()
}
