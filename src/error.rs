use reqwest::StatusCode;
use std::fmt;

/// Custom error type for Logplex operations
#[derive(Debug)]
pub enum LogplexError {
    /// HTTP request failed (DNS, connect, TLS, body read)
    Http(reqwest::Error),
    /// API answered with an unexpected status code
    Api { status: StatusCode, context: String },
    /// Configuration error (missing or invalid environment settings)
    Config(String),
    /// Response body could not be decoded
    Json(String),
}

impl fmt::Display for LogplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogplexError::Http(e) => write!(f, "HTTP request failed: {}", e),
            LogplexError::Api { status, context } => {
                write!(
                    f,
                    "Failed to {}: unsuccessful response ({}) from logplex",
                    context, status
                )
            }
            LogplexError::Config(msg) => write!(f, "Configuration error: {}", msg),
            LogplexError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for LogplexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogplexError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LogplexError {
    fn from(err: reqwest::Error) -> Self {
        LogplexError::Http(err)
    }
}

impl From<serde_json::Error> for LogplexError {
    fn from(err: serde_json::Error) -> Self {
        LogplexError::Json(err.to_string())
    }
}

/// Result type alias for Logplex operations
pub type Result<T> = std::result::Result<T, LogplexError>;
