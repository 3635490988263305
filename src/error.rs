//! Error types for Jewel
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Jewel operations
///
/// The two request-level variants map directly onto HTTP statuses:
/// `InvalidRequest` becomes a 400 and `Upstream` becomes a 500 whose
/// body carries the upstream message unchanged.
#[derive(Error, Debug)]
pub enum JewelError {
    /// A required request field was missing or empty
    #[error("{0}")]
    InvalidRequest(String),

    /// Any failure reported by the model API (transport, auth, quota, model-side)
    ///
    /// The display form is the bare upstream message so it can be surfaced
    /// verbatim to clients.
    #[error("{0}")]
    Upstream(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session history storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Page template errors
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Result type alias for Jewel operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_display_is_bare_message() {
        let error = JewelError::InvalidRequest("Message cannot be empty.".to_string());
        assert_eq!(error.to_string(), "Message cannot be empty.");
    }

    #[test]
    fn test_upstream_display_is_verbatim() {
        let error = JewelError::Upstream("API key not valid. Please pass a valid API key.".to_string());
        assert_eq!(
            error.to_string(),
            "API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = JewelError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_storage_error_display() {
        let error = JewelError::Storage("history lock poisoned".to_string());
        assert_eq!(error.to_string(), "Storage error: history lock poisoned");
    }

    #[test]
    fn test_template_error_conversion() {
        let mut env = minijinja::Environment::new();
        let template_error = env.add_template("broken", "{% if %}").unwrap_err();
        let error: JewelError = template_error.into();
        assert!(error.to_string().starts_with("Template error:"));
    }

    #[test]
    fn test_anyhow_downcast_recovers_variant() {
        let err: anyhow::Error = JewelError::Upstream("quota exceeded".to_string()).into();
        let recovered = err.downcast_ref::<JewelError>();
        assert!(matches!(recovered, Some(JewelError::Upstream(m)) if m == "quota exceeded"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JewelError>();
    }
}
