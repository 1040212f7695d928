use hourscope_engine::{compare, hourly_series, trend_of};
use hourscope_types::AnalysisResult;

use super::view_models::ReportViewModel;

pub fn present_report(result: &AnalysisResult) -> ReportViewModel {
    ReportViewModel {
        result: result.clone(),
        trend: trend_of(result),
        series: hourly_series(result),
        comparison: compare(result),
    }
}
