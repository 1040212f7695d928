pub mod analysis;
pub mod error;
pub mod name;
pub mod suggestion;
pub mod theme;

pub use analysis::{AnalysisResult, HOURS_PER_DAY, PreviousAnalysis, Trend};
pub use error::{Error, Result};
pub use name::SubredditName;
pub use suggestion::{ErrorBody, SearchResponse, SubredditSuggestion, partition_valid};
pub use theme::ThemePreference;
