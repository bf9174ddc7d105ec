//! Shared Error Types
//!
//! Errors raised by the two external collaborators of the client: the
//! authentication provider and the check-in backend.
//!
//! # Error Categories
//!
//! - `AuthError` - signup, login, logout and token failures
//! - `ApiError` - `/checkin` and `/status` failures
//!
//! # Usage
//!
//! ```rust
//! use dailysafe::shared::error::ApiError;
//!
//! let error = ApiError::rejected(500, Some("database unavailable".to_string()));
//! assert_eq!(error.notice_text().as_deref(), Some("database unavailable"));
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync + Clone` so they can cross task boundaries
//! and be kept in UI state.
use thiserror::Error;

/// Failures reported by the authentication provider
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The provider rejected the request
    #[error("{message}")]
    Provider {
        /// Provider error code, e.g. `auth/email-already-in-use`
        code: String,
        /// Human-readable message as the provider's SDK would show it
        message: String,
    },

    /// The provider could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with something that is not its documented shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// No API key configured for the provider
    #[error("Firebase: Error (auth/invalid-api-key).")]
    MissingApiKey,

    /// The persisted session could not be read or written
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl AuthError {
    /// Create a new provider rejection
    pub fn provider(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Text for the notice slot, `None` when there is nothing worth showing
    pub fn notice_text(&self) -> Option<String> {
        let text = self.to_string();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Failures talking to the check-in backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (connection refused, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The body was not JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Non-2xx status or an explicit `ok: false`
    #[error("Request rejected with status {status}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// The body's `error` field, if any
        message: Option<String>,
    },
}

impl ApiError {
    /// Create a new rejection
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }

    /// Text for the notice slot.
    ///
    /// A rejection only carries the backend's own `error` string; callers fall
    /// back to a localized message when it is absent. Transport and parse
    /// failures always describe themselves.
    pub fn notice_text(&self) -> Option<String> {
        match self {
            Self::Rejected { message, .. } => message.clone().filter(|m| !m.is_empty()),
            other => Some(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_displays_message_only() {
        let error = AuthError::provider(
            "auth/email-already-in-use",
            "Firebase: Error (auth/email-already-in-use).",
        );
        assert_eq!(error.to_string(), "Firebase: Error (auth/email-already-in-use).");
        assert_eq!(
            error.notice_text().as_deref(),
            Some("Firebase: Error (auth/email-already-in-use).")
        );
    }

    #[test]
    fn test_blank_provider_message_has_no_notice_text() {
        let error = AuthError::provider("auth/internal-error", "  ");
        assert!(error.notice_text().is_none());
    }

    #[test]
    fn test_rejection_uses_backend_message() {
        let error = ApiError::rejected(400, Some("already checked in".to_string()));
        assert_eq!(error.notice_text().as_deref(), Some("already checked in"));
    }

    #[test]
    fn test_rejection_without_message_defers_to_fallback() {
        assert!(ApiError::rejected(500, None).notice_text().is_none());
        assert!(ApiError::rejected(500, Some(String::new())).notice_text().is_none());
    }

    #[test]
    fn test_network_error_describes_itself() {
        let error = ApiError::Network("connection refused".to_string());
        let text = error.notice_text().unwrap();
        assert!(text.contains("Network error"));
        assert!(text.contains("connection refused"));
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("<html>");
        let error: ApiError = result.unwrap_err().into();
        match error {
            ApiError::Decode(_) => {}
            other => panic!("Expected Decode, got {other:?}"),
        }
    }
}
