use hourscope_types::{AnalysisResult, Trend};
use serde::Serialize;
use std::cmp::Ordering;

/// Compare a current peak with an optional previous peak.
///
/// No previous snapshot means there is nothing to compare, which reads as
/// [`Trend::Stable`].
pub fn classify_trend(current_max: u64, previous_max: Option<u64>) -> Trend {
    let Some(previous) = previous_max else {
        return Trend::Stable;
    };
    match current_max.cmp(&previous) {
        Ordering::Greater => Trend::Increasing,
        Ordering::Less => Trend::Decreasing,
        Ordering::Equal => Trend::Stable,
    }
}

/// Trend of a result against its own `previous_analysis`.
pub fn trend_of(result: &AnalysisResult) -> Trend {
    classify_trend(
        result.max_post_count,
        result.previous_analysis.map(|p| p.max_post_count),
    )
}

/// Side-by-side figures for the comparative section of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendComparison {
    pub previous_max: u64,
    pub current_max: u64,
    pub trend: Trend,
}

/// Present only when the result carries a previous snapshot.
pub fn compare(result: &AnalysisResult) -> Option<TrendComparison> {
    result.previous_analysis.map(|previous| TrendComparison {
        previous_max: previous.max_post_count,
        current_max: result.max_post_count,
        trend: trend_of(result),
    })
}
