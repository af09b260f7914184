//! Errors from the generation client

use std::fmt;

/// Why a generation attempt failed
///
/// All variants collapse to one user-facing message; the distinction is for logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No API key could be resolved; no request was sent
    MissingApiKey,
    /// Connection or transport failure
    Network(String),
    /// Non-success HTTP status from the API
    Api { status: u16, message: String },
    /// Response didn't carry a `captions` array of strings
    Format(String),
}

/// Coarse diagnostic category of a [`GenerationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Format,
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiKey => ErrorKind::Configuration,
            Self::Network(_) | Self::Api { .. } => ErrorKind::Transport,
            Self::Format(_) => ErrorKind::Format,
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "API key is missing"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            Self::Format(msg) => write!(f, "Invalid response format: {}", msg),
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Format(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
