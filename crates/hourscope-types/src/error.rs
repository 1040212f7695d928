use std::fmt;

/// Result type for hourscope-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Subreddit name violates the 3-21 character `[A-Za-z0-9_]` rule
    InvalidName(String),

    /// Unknown theme preference value
    InvalidTheme(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidName(name) => write!(f, "Invalid subreddit name: {:?}", name),
            Error::InvalidTheme(value) => {
                write!(f, "Invalid theme '{}': expected 'light' or 'dark'", value)
            }
        }
    }
}

impl std::error::Error for Error {}
