use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const MIN_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 21;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]{3,21}$").expect("subreddit name pattern is valid")
});

/// Returns true when `raw` is a syntactically valid subreddit name.
pub fn is_valid_name(raw: &str) -> bool {
    NAME_PATTERN.is_match(raw)
}

/// Subreddit identifier that has passed syntax validation.
///
/// Analysis requests can only be built from this type, so a name that
/// never went through validation cannot reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubredditName(String);

impl SubredditName {
    /// Parse a raw name. Surrounding whitespace is trimmed first.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if is_valid_name(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(Error::InvalidName(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubredditName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubredditName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SubredditName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<SubredditName> for String {
    fn from(name: SubredditName) -> Self {
        name.0
    }
}

impl AsRef<str> for SubredditName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_boundary_lengths() {
        assert!(SubredditName::parse("abc").is_ok());
        assert!(SubredditName::parse(&"a".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_rejects_short_long_and_symbols() {
        assert!(SubredditName::parse("ab").is_err());
        assert!(SubredditName::parse(&"a".repeat(MAX_NAME_LEN + 1)).is_err());
        assert!(SubredditName::parse("bad name!").is_err());
        assert!(SubredditName::parse("rust-lang").is_err());
        assert!(SubredditName::parse("").is_err());
    }

    #[test]
    fn test_trims_whitespace() {
        let name = SubredditName::parse("  rust_gamedev \n").unwrap();
        assert_eq!(name.as_str(), "rust_gamedev");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: std::result::Result<SubredditName, _> = serde_json::from_str("\"programming\"");
        assert!(ok.is_ok());

        let bad: std::result::Result<SubredditName, _> = serde_json::from_str("\"no\"");
        assert!(bad.is_err());
    }
}
