//! Error taxonomy for API calls.
//!
//! Three families, mirroring what actually goes wrong against the remote:
//! transport failures (the request never completed), non-2xx responses
//! mapped by status, and 2xx responses whose body is not what the contract
//! promised. Validation failures (422) keep their per-field messages so
//! callers can surface them next to the offending form field instead of as
//! one generic alert. None of these are fatal; every operation can simply
//! be retried.

use std::collections::BTreeMap;

use thiserror::Error;

/// Field name -> messages, as sent by the server for validation failures
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure: DNS, connect, timeout, TLS
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// No usable token in the session; nothing was sent
    #[error("not logged in")]
    NotAuthenticated,

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// 422 with per-field messages
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Any other non-success status
    #[error("unexpected response ({status}): {message}")]
    Http { status: u16, message: String },

    /// 2xx but `success: false` in the envelope
    #[error("{0}")]
    Rejected(String),

    /// Body did not match the envelope contract
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for failures that a fresh login would fix
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated | ApiError::Unauthorized(_))
    }

    /// Per-field validation messages, when this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_only_on_validation() {
        let mut errors = FieldErrors::new();
        errors.insert("amount".to_string(), vec!["must be positive".to_string()]);
        let err = ApiError::Validation { message: "invalid payment".to_string(), errors };
        assert_eq!(
            err.field_errors().unwrap()["amount"],
            vec!["must be positive".to_string()]
        );
        assert!(ApiError::NotAuthenticated.field_errors().is_none());
    }

    #[test]
    fn test_is_auth() {
        assert!(ApiError::NotAuthenticated.is_auth());
        assert!(ApiError::Unauthorized("token expired".to_string()).is_auth());
        assert!(!ApiError::NotFound("no such payment".to_string()).is_auth());
    }
}
