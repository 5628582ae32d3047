//! Error types for the library
//!
//! Every fallible operation in the crate returns [`AppError`]. Failures are
//! always surfaced as a distinct variant; no operation swallows an error and
//! returns an empty value in its place.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The transport failed in a way that prevents determining token
    /// validity, or the provider kept rejecting authorization after a
    /// successful token refresh
    Authentication(String),
    /// A token refresh was attempted and rejected by the provider, or no
    /// refresh token was available
    TokenRefresh(String),
    /// The terminal response carried a non-success status code
    Request {
        /// Status code of the terminal response
        status: StatusCode,
        /// Provider-supplied error message, when present
        message: String,
    },
    /// The response body was not valid structured data when structured data
    /// was expected, or was unexpectedly empty
    ResponseParse(String),
    /// Caller-supplied input was rejected before a request was issued
    InvalidInput(String),
    /// Error building or driving the underlying HTTP client
    Http(reqwest::Error),
    /// JSON serialization error
    Json(serde_json::Error),
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Authentication(msg) => write!(f, "authentication error: {msg}"),
            AppError::TokenRefresh(msg) => write!(f, "token refresh failed: {msg}"),
            AppError::Request { status, message } => {
                write!(f, "request failed with status {status}: {message}")
            }
            AppError::ResponseParse(msg) => write!(f, "response parse error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Http(err) => write!(f, "http error: {err}"),
            AppError::Json(err) => write!(f, "json error: {err}"),
            AppError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Http(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Http(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
