use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for Tripadvisor operations
pub type Result<T> = std::result::Result<T, TripAdvisorError>;

/// Errors that can occur when using the Tripadvisor Content API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TripAdvisorError {
    /// Missing or invalid client configuration (API key, base URL, timeouts)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Outbound parameters or an inbound payload did not match their shape
    #[error("{direction}: {message}")]
    Validation {
        /// Which side of the exchange failed validation
        direction: Direction,
        /// What was wrong, including the offending field path
        message: String,
    },

    /// The API reported a failure inside an otherwise successful exchange
    #[error("API error: {message}")]
    Api {
        /// Error message from the API
        message: String,
        /// Numeric error code, when the API provided one
        code: Option<i64>,
        /// Error type tag, when the API provided one
        kind: Option<String>,
    },

    /// Network, timeout, or HTTP status failure
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl TripAdvisorError {
    /// Build a validation error for outbound request parameters
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::Validation {
            direction: Direction::Request,
            message: message.into(),
        }
    }

    /// Build a validation error for an inbound response payload
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::Validation {
            direction: Direction::Response,
            message: message.into(),
        }
    }

    /// Returns true if another attempt could succeed.
    ///
    /// Only transport failures carry a retryable flag; every other kind is final.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(err) => err.retryable,
            _ => false,
        }
    }

    /// Returns true if the remote service reported a domain error
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns true if parameters or payload failed shape validation
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns the HTTP status code if the exchange failed with one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport(TransportError {
                cause: TransportCause::HttpStatus { status, .. },
                ..
            }) => Some(*status),
            _ => None,
        }
    }
}

/// Which side of an exchange failed shape validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Caller-supplied parameters, checked before any network call
    Request,
    /// Payload returned by the API
    Response,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request => write!(f, "invalid request parameters"),
            Self::Response => write!(f, "invalid response payload"),
        }
    }
}

/// A failed network exchange.
///
/// Whether the failure is worth another attempt is decided where the error is
/// built and carried alongside the cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("transport error: {cause}")]
pub struct TransportError {
    /// What went wrong
    pub cause: TransportCause,
    /// Whether another attempt may succeed
    pub retryable: bool,
}

impl TransportError {
    /// The exchange did not complete within the allotted time
    #[must_use]
    pub const fn timeout(after: Duration) -> Self {
        Self {
            cause: TransportCause::Timeout(after),
            retryable: true,
        }
    }

    /// The connection could not be established or was dropped
    pub fn connection(message: impl Into<String>) -> Self {
        Self {
            cause: TransportCause::Connection(message.into()),
            retryable: true,
        }
    }

    /// The server answered with a non-2xx status; only 5xx is retryable
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            cause: TransportCause::HttpStatus {
                status,
                message: message.into(),
            },
            retryable: (500..600).contains(&status),
        }
    }

    /// A 2xx body that is not valid JSON
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self {
            cause: TransportCause::InvalidBody(message.into()),
            retryable: false,
        }
    }

    /// The request could not be built (bad header, bad method)
    pub fn request(message: impl Into<String>) -> Self {
        Self {
            cause: TransportCause::Request(message.into()),
            retryable: false,
        }
    }

    /// The caller cancelled the call
    #[must_use]
    pub const fn cancelled() -> Self {
        Self {
            cause: TransportCause::Cancelled,
            retryable: false,
        }
    }
}

/// Underlying reason for a [`TransportError`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportCause {
    /// Request timed out
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Non-2xx HTTP status
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// Response body could not be parsed as JSON
    #[error("malformed response body: {0}")]
    InvalidBody(String),

    /// Request could not be constructed
    #[error("invalid request: {0}")]
    Request(String),

    /// Cancelled by the caller
    #[error("request cancelled")]
    Cancelled,
}
