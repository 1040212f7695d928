//! # Presentation Layer
//!
//! Console output follows one direction:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] ==(JSON)==> [ serde_json ] --> stdout
//!                                                 ==(Text)==> [ View ] --> stdout
//! ```
//!
//! * `view_models`: raw data. JSON output is an API, so numbers stay numbers.
//! * `presenters`: turn domain results into view models.
//! * `views`: `fmt::Display` structs that own layout and colour.
//! * `formatters`: small string helpers used by views.

pub mod formatters;
pub mod presenters;
pub mod view_models;
pub mod views;

pub use formatters::DisplayOptions;
pub use presenters::present_report;
pub use view_models::ReportViewModel;
pub use views::{ReportView, SuggestionListView};

use anyhow::Result;
use serde::Serialize;

/// `--format json` always dumps the complete value.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
