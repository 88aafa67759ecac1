//! Errors at the catalog boundary

use std::fmt;

/// Errors that can occur while fetching a page of cards
///
/// The browse session treats every variant the same way (clear the loading
/// flag, keep results); the distinction only matters for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Base URL + query could not form a valid URL
    InvalidUrl(String),
    /// Network error (connect, timeout, body read)
    Transport(String),
    /// Non-success HTTP status from the catalog
    Status { status: u16, message: String },
    /// Body was not the expected JSON shape
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(msg) => write!(f, "Invalid catalog URL: {}", msg),
            Self::Transport(msg) => write!(f, "Network error: {}", msg),
            Self::Status { status, message } => {
                if message.is_empty() {
                    write!(f, "Catalog returned HTTP {}", status)
                } else {
                    write!(f, "Catalog returned HTTP {}: {}", status, message)
                }
            }
            Self::Decode(msg) => write!(f, "Failed to parse catalog response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
