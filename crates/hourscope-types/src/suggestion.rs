use serde::{Deserialize, Serialize};

use crate::name::is_valid_name;

/// One autocomplete entry returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubredditSuggestion {
    pub name: String,
    pub title: String,
}

impl SubredditSuggestion {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }

    pub fn has_valid_name(&self) -> bool {
        is_valid_name(&self.name)
    }
}

/// Body of `GET /subreddit/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SubredditSuggestion>,
}

/// Split suggestions into entries that satisfy the name rule and the ones
/// that do not. Server order is preserved in both lists.
pub fn partition_valid(
    suggestions: Vec<SubredditSuggestion>,
) -> (Vec<SubredditSuggestion>, Vec<SubredditSuggestion>) {
    suggestions.into_iter().partition(|s| s.has_valid_name())
}

/// Structured error payload shared by both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
