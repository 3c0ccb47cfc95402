//! Error types for the Stripe API client.
//!
//! This module provides a single error type covering transport failures,
//! errors reported by the Stripe API, and misuse of the parameter types.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Stripe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Stripe API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response
    #[error("API error: status={status}, type={error_type:?}, code={code:?}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Stripe error type, e.g. `invalid_request_error`
        error_type: Option<String>,
        /// Optional machine-readable error code
        code: Option<String>,
        /// Human-readable error message
        message: String,
        /// The parameter the error relates to, if any
        param: Option<String>,
        /// Raw response body for debugging
        body: Value,
    },

    /// The card was declined or could not be charged (HTTP 402)
    #[error("Card error: code={code:?}, decline_code={decline_code:?}, message={message}")]
    Card {
        /// Card error code, e.g. `card_declined`
        code: Option<String>,
        /// Issuer decline code, e.g. `insufficient_funds`
        decline_code: Option<String>,
        /// Human-readable error message
        message: String,
        /// The parameter the error relates to, if any
        param: Option<String>,
    },

    /// Authentication failed (missing, invalid or revoked API key)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Parameters could not be form-encoded
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Rate limited by the API
    #[error("Rate limited; retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Number of seconds to wait before retrying
        retry_after_secs: u64,
    },

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried.
    ///
    /// # Example
    ///
    /// ```
    /// use stripe_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Retrying operation...");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::Timeout | Error::RateLimited { .. } => true,
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_))
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, declined card, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::Card { .. }
            | Error::NotFound(_)
            | Error::InvalidInput(_)
            | Error::Encoding(_)
            | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a Stripe error response body.
    ///
    /// Stripe wraps errors as `{"error": {"type", "code", "message", "param"}}`.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let field = |name: &str| {
            body.get("error")
                .and_then(|e| e.get(name))
                .and_then(|v| v.as_str())
                .map(String::from)
        };

        let error_type = field("type");
        let code = field("code");
        let param = field("param");
        let message = field("message").unwrap_or_else(|| "Unknown API error".to_string());

        let decline_code = field("decline_code");
        let is_card_error = status == 402 || error_type.as_deref() == Some("card_error");

        match status {
            401 => Error::Authentication(message),
            404 => Error::NotFound(message),
            _ if is_card_error => Error::Card {
                code,
                decline_code,
                message,
                param,
            },
            _ => Error::Api {
                status,
                error_type,
                code,
                message,
                param,
                body,
            },
        }
    }
}
