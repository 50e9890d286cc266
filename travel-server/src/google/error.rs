//! Google Maps client error types.

use std::fmt;

use crate::planner::ProviderError;

/// Errors from the Google Maps HTTP client.
#[derive(Debug)]
pub enum GoogleError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Request was rejected (missing or invalid API key)
    Unauthorized(String),

    /// Response status other than "OK" or "ZERO_RESULTS"
    Status {
        status: String,
        message: Option<String>,
    },

    /// The query matched nothing
    NoResults(String),
}

impl fmt::Display for GoogleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoogleError::Http(e) => write!(f, "HTTP error: {e}"),
            GoogleError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            GoogleError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            GoogleError::Unauthorized(message) => write!(f, "request denied: {message}"),
            GoogleError::Status { status, message } => {
                write!(f, "unexpected status {status}")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            GoogleError::NoResults(query) => write!(f, "no results for {query:?}"),
        }
    }
}

impl std::error::Error for GoogleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GoogleError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GoogleError {
    fn from(err: reqwest::Error) -> Self {
        GoogleError::Http(err)
    }
}

impl From<GoogleError> for ProviderError {
    fn from(err: GoogleError) -> Self {
        match err {
            GoogleError::NoResults(query) => ProviderError::NotFound(query),
            other => ProviderError::Upstream(other.to_string()),
        }
    }
}
