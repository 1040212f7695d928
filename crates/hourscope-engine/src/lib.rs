// Engine module - pure derivations over analysis results.
// Sits between the wire records (types) and presentation; performs no I/O.

pub mod format;
pub mod histogram;
pub mod series;
pub mod trend;
pub mod verify;

pub use format::{format_hour, format_hours, optimal_hours_summary};
pub use histogram::{derive_result, max_post_count, optimal_hours};
pub use series::{HourlyPoint, hourly_series};
pub use trend::{TrendComparison, classify_trend, compare, trend_of};
pub use verify::{Violation, verify_result};
