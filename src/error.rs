// src/error.rs

//! Unified error handling for the LMS client.

use std::fmt;

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, LmsError>;

/// Unified client error type.
#[derive(Error, Debug)]
pub enum LmsError {
    /// HTTP request failed at the transport level
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with an unexpected status code
    #[error("Expected HTTP status code 200 from {endpoint}, got {status}")]
    Status { endpoint: String, status: u16 },

    /// JSON envelope could not be decoded
    #[error("Malformed JSON envelope from {endpoint}: {source}")]
    Envelope {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Portal reported `isError` with a message
    #[error("Portal error: {0}")]
    Remote(String),

    /// Markup did not match the expected structure
    #[error("Parse error ({context}): {raw:?}")]
    Parse { context: String, raw: String },

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Caller violated an argument constraint
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Credentials were rejected by the portal
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of an [`LmsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Protocol,
    Parse,
    Precondition,
    Auth,
    Config,
}

impl LmsError {
    /// Create a parse error carrying the offending raw text.
    pub fn parse(context: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
            raw: raw.into(),
        }
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a precondition error.
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) => ErrorKind::Transport,
            Self::Status { .. } | Self::Envelope { .. } | Self::Remote(_) => ErrorKind::Protocol,
            Self::Parse { .. } | Self::Selector { .. } | Self::Json(_) => ErrorKind::Parse,
            Self::Precondition(_) => ErrorKind::Precondition,
            Self::Auth(_) => ErrorKind::Auth,
            Self::Io(_) | Self::Toml(_) | Self::Config(_) => ErrorKind::Config,
        }
    }
}

/// Fail-fast conversion for callers that prefer aborting over handling errors.
pub trait OrAbort<T> {
    /// Return the value or panic with the error message.
    fn or_abort(self) -> T;
}

impl<T> OrAbort<T> for Result<T> {
    fn or_abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                log::error!("Aborting on error: {}", e);
                panic!("{e}");
            }
        }
    }
}
