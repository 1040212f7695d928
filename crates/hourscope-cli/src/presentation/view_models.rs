use hourscope_engine::{HourlyPoint, TrendComparison};
use hourscope_types::{AnalysisResult, Trend};
use serde::Serialize;

/// Everything the analysis report shows.
#[derive(Debug, Clone, Serialize)]
pub struct ReportViewModel {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub trend: Trend,
    pub series: Vec<HourlyPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<TrendComparison>,
}
