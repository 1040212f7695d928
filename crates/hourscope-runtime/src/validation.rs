use hourscope_types::{SubredditName, SubredditSuggestion};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NOT_SELECTED_MESSAGE: &str = "Please select a subreddit from the suggestions.";
pub const EMPTY_NAME_MESSAGE: &str = "Please enter a subreddit name.";
pub const INVALID_NAME_MESSAGE: &str = "Invalid subreddit name. Subreddits must be 3-21 characters and can contain letters, numbers, and underscores.";

/// Which inputs may be submitted for analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationPolicy {
    /// Only a subreddit picked from the suggestion list
    #[default]
    #[serde(rename = "selection")]
    SelectionRequired,
    /// A picked subreddit, or typed text that matches the name pattern
    #[serde(rename = "pattern")]
    SelectionOrPattern,
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPolicy::SelectionRequired => write!(f, "selection"),
            ValidationPolicy::SelectionOrPattern => write!(f, "pattern"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NotSelected,
    EmptyName,
    InvalidName,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::NotSelected => NOT_SELECTED_MESSAGE,
            ValidationError::EmptyName => EMPTY_NAME_MESSAGE,
            ValidationError::InvalidName => INVALID_NAME_MESSAGE,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Decide whether a submit may proceed, and with which subreddit.
///
/// A selected suggestion always takes precedence over typed text. Its name
/// is still checked against the pattern since it came from the network.
pub fn validate_submission(
    policy: ValidationPolicy,
    selected: Option<&SubredditSuggestion>,
    typed: &str,
) -> Result<SubredditName, ValidationError> {
    if let Some(suggestion) = selected {
        return SubredditName::parse(&suggestion.name).map_err(|_| ValidationError::InvalidName);
    }

    match policy {
        ValidationPolicy::SelectionRequired => Err(ValidationError::NotSelected),
        ValidationPolicy::SelectionOrPattern => {
            if typed.trim().is_empty() {
                return Err(ValidationError::EmptyName);
            }
            SubredditName::parse(typed).map_err(|_| ValidationError::InvalidName)
        }
    }
}
