use thiserror::Error;

use crate::constants::FALLBACK_ERROR_MSG;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DinnerError {
    /// Service answered with a non-success status.
    #[error("{0}")]
    Request(&'static str),
    #[error("{0}")]
    Unknown(String),
}

impl DinnerError {
    /// Wraps any other failure, falling back to a generic message when the
    /// underlying error has none.
    pub fn unknown(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        if msg.trim().is_empty() {
            DinnerError::Unknown(FALLBACK_ERROR_MSG.to_string())
        } else {
            DinnerError::Unknown(msg)
        }
    }
}

impl From<reqwest::Error> for DinnerError {
    fn from(e: reqwest::Error) -> Self {
        DinnerError::unknown(e.to_string())
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MenuParseError {
    #[error("Unknown command: {0} (h for help)")]
    UnknownCommand(String),
    #[error("No category at position {0}")]
    NoSuchPosition(usize),
}
