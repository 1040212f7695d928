mod http;

pub use http::HttpApi;

use hourscope_types::{AnalysisResult, SubredditName, SubredditSuggestion};
use std::fmt;
use std::future::Future;

/// Message shown when a failure carries no structured error body.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failure of a remote call, as seen by the orchestration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response; `message` is the `error` field of the body when
    /// the body was a structured error payload
    Status { status: u16, message: Option<String> },

    /// Request never produced a response (connect, timeout, ...)
    Transport(String),

    /// 2xx response whose body could not be decoded
    Decode(String),
}

impl ApiError {
    /// Text for the user-facing notice: the server's own message when it
    /// sent one, otherwise [`GENERIC_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status {
                status,
                message: Some(message),
            } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Status {
                status,
                message: None,
            } => write!(f, "HTTP {}", status),
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// The two backend endpoints the client consumes.
///
/// Implementations must be shareable across tasks: the search coordinator
/// and the analysis controller each hold an `Arc` and call it from spawned
/// tasks.
pub trait SubredditApi: Send + Sync + 'static {
    /// `GET /subreddit/search?q=<query>`; results in server order.
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = ApiResult<Vec<SubredditSuggestion>>> + Send;

    /// `GET /subreddit/<name>/analysis?timezone=<zone>`
    fn analyze(
        &self,
        subreddit: &SubredditName,
        timezone: &str,
    ) -> impl Future<Output = ApiResult<AnalysisResult>> + Send;
}
