//! The `{success, message, data}` wrapper around every backend response.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Backend response envelope.
///
/// Error bodies additionally carry an `error` detail string; list endpoints
/// add pagination fields, which are ignored here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope wrapping `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self { success: true, message: message.into(), data: Some(data), error: None }
    }

    /// Failed envelope with a message and no data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), data: None, error: None }
    }

    /// The envelope message, or `fallback` when the backend sent none.
    #[must_use]
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        let trimmed = self.message.trim();
        if trimmed.is_empty() { fallback } else { trimmed }
    }

    /// Resolve to `data` when `success` is set and data is present.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] carrying the envelope message (or
    /// `fallback`) otherwise.
    pub fn into_data(self, status: u16, fallback: &str) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => {
                let message = if self.message.trim().is_empty() { fallback } else { self.message.trim() };
                Err(ApiError::request_failed(Some(status), message))
            }
        }
    }
}
