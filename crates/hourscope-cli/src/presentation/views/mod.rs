mod report;
mod suggestions;

pub use report::ReportView;
pub use suggestions::SuggestionListView;
