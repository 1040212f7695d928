//! Client-side query orchestration for hourscope.
//!
//! Keystrokes flow through a [`Debouncer`] into the [`SearchCoordinator`],
//! which keeps only the newest search authoritative. A submit runs through
//! [`validate_submission`] and then the [`AnalysisController`], which allows
//! a single analysis request in flight. [`QuerySession`] owns both halves for
//! one interactive session and releases every timer and task when dropped.

pub mod analysis;
pub mod api;
pub mod config;
pub mod debounce;
pub mod error;
pub mod generation;
pub mod search;
pub mod session;
pub mod validation;

pub use analysis::{
    AnalysisController, AnalysisTicket, MALFORMED_RESULT_MESSAGE, QueryState, Submission,
};
pub use api::{ApiError, ApiResult, GENERIC_ERROR_MESSAGE, HttpApi, SubredditApi};
pub use config::{Config, resolve_config_dir};
pub use debounce::{DEFAULT_QUIET_PERIOD, Debouncer};
pub use error::{Error, Result};
pub use generation::{Generation, GenerationToken};
pub use search::{SearchCoordinator, SearchState};
pub use session::{QuerySession, SessionOptions};
pub use validation::{ValidationError, ValidationPolicy, validate_submission};
