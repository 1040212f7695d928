use hourscope_types::AnalysisResult;
use serde::Serialize;

use crate::format::format_hour;

/// One bar of the hourly activity chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyPoint {
    pub hour: usize,
    pub label: String,
    pub posts: u64,
    /// Bar reaches the maximum and should be highlighted
    pub optimal: bool,
}

/// Chart-ready series, one point per histogram bucket.
pub fn hourly_series(result: &AnalysisResult) -> Vec<HourlyPoint> {
    result
        .hourly_post_counts
        .iter()
        .enumerate()
        .map(|(hour, &posts)| HourlyPoint {
            hour,
            label: format_hour(hour),
            posts,
            optimal: posts == result.max_post_count,
        })
        .collect()
}
