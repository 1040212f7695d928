use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of buckets in an hourly histogram.
pub const HOURS_PER_DAY: usize = 24;

/// Hour-of-day posting histogram for one subreddit, as returned by
/// `GET /subreddit/<name>/analysis`.
///
/// Consumers rely on these invariants:
/// - `hourly_post_counts` has exactly [`HOURS_PER_DAY`] entries
/// - `max_post_count` is the maximum of `hourly_post_counts`
/// - `optimal_hours` is non-empty, ascending, and lists every hour whose
///   count equals `max_post_count`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub subreddit: String,
    /// IANA zone identifier the hours are expressed in
    pub timezone: String,
    pub hourly_post_counts: Vec<u64>,
    pub optimal_hours: Vec<usize>,
    pub max_post_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_analysis: Option<PreviousAnalysis>,
}

/// Snapshot of an earlier analysis used for trend comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousAnalysis {
    pub max_post_count: u64,
}

/// Direction of the peak hourly count compared with a previous analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

impl Trend {
    /// Capitalized form used in labels ("Trend: Increasing").
    pub fn title(&self) -> &'static str {
        match self {
            Trend::Increasing => "Increasing",
            Trend::Decreasing => "Decreasing",
            Trend::Stable => "Stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Increasing => write!(f, "increasing"),
            Trend::Decreasing => write!(f, "decreasing"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}
