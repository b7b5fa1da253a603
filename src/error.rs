//! Error types for dab-feed
//!
//! This module defines the error hierarchy for the whole adapter.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for dab-feed
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Remote Errors
    // ============================================================================
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote API error {status}: {message}")]
    RemoteApi { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Malformed cursor: {message}")]
    MalformedCursor { message: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication required: log in to use this operation")]
    AuthenticationRequired,

    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ============================================================================
    // Operation Errors
    // ============================================================================
    #[error("Unsupported operation: {message}")]
    UnsupportedOperation { message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Context
    // ============================================================================
    /// Another error with a caller-supplied prefix; see [`Error::root`]
    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a remote API error
    pub fn remote_api(status: u16, message: impl Into<String>) -> Self {
        Self::RemoteApi {
            status,
            message: message.into(),
        }
    }

    /// Create a malformed cursor error
    pub fn malformed_cursor(message: impl Into<String>) -> Self {
        Self::MalformedCursor {
            message: message.into(),
        }
    }

    /// Create an authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Wrap this error with a message, keeping it as the source
    pub fn context(self, message: impl Into<String>) -> Self {
        Self::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error beneath any context layers
    pub fn root(&self) -> &Error {
        match self {
            Error::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Whether the host should prompt the user to log in again
    pub fn is_auth_failure(&self) -> bool {
        match self.root() {
            Error::AuthenticationRequired | Error::Authentication { .. } => true,
            Error::RemoteApi { status, .. } => *status == 401,
            _ => false,
        }
    }

    /// Whether a caller could reasonably retry the failed call.
    ///
    /// The adapter itself never retries; this only classifies.
    pub fn is_retryable(&self) -> bool {
        match self.root() {
            Error::Transport(e) => e.is_timeout() || e.is_connect(),
            Error::RemoteApi { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for dab-feed
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Into::<Error>::into(e).context(message))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Into::<Error>::into(e).context(f()))
    }
}
