//! Error taxonomy surfaced to views and commands.
//!
//! `Display` renders only the user-facing message so callers can show
//! `err.to_string()` inline without further formatting.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::transport::TransportError;

/// Errors produced by [`crate::ApiClient`] and [`crate::AuthContext`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A required field was missing or malformed; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// The backend rejected the credentials or the bearer token (HTTP 401).
    #[error("{0}")]
    AuthenticationFailed(String),

    /// The session's role may not perform this request (HTTP 403).
    #[error("{0}")]
    Forbidden(String),

    /// Any other network, HTTP, or envelope failure.
    #[error("{message}")]
    RequestFailed { status: Option<u16>, message: String },
}

impl ApiError {
    pub(crate) fn request_failed(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::RequestFailed { status, message: message.into() }
    }

    /// HTTP status associated with the error, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation(_) => None,
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::RequestFailed { status, .. } => *status,
        }
    }

    /// Whether the backend refused the session itself, which invalidates it.
    #[must_use]
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// Short machine-readable category, used in logs and CLI output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::AuthenticationFailed(_) => "authentication_failed",
            Self::Forbidden(_) => "forbidden",
            Self::RequestFailed { .. } => "request_failed",
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::request_failed(None, err.to_string())
    }
}
