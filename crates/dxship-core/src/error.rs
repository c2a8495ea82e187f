//! Unified error handling for DX shipping
//!
//! The engine itself is total over well-formed inputs; errors come from the
//! boundaries: a malformed stored settings document, a failed store-settings
//! load, or an admin form that does not validate.

use thiserror::Error;

/// Main error type for the shipping engine and its collaborators
#[derive(Error, Debug)]
pub enum ShippingError {
    // ==================== Store Errors ====================
    #[error("Settings store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // ==================== Configuration Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),

    // ==================== Validation Errors ====================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ==================== Internal Errors ====================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShippingError {
    /// Returns a stable code for logs and diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            ShippingError::Store(_) => "store_error",
            ShippingError::Serialization(_) => "serialization_error",
            ShippingError::Config(_) => "config_error",
            ShippingError::Validation(_) => "validation_error",
            ShippingError::InvalidInput(_) => "invalid_input",
            ShippingError::Internal(_) => "internal_error",
        }
    }
}

// ==================== From implementations ====================

impl From<serde_json::Error> for ShippingError {
    fn from(err: serde_json::Error) -> Self {
        ShippingError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for ShippingError {
    fn from(err: config::ConfigError) -> Self {
        ShippingError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ShippingError {
    fn from(err: validator::ValidationErrors) -> Self {
        ShippingError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ShippingError::Store("down".to_string()).code(),
            "store_error"
        );
        assert_eq!(
            ShippingError::InvalidInput("qty".to_string()).code(),
            "invalid_input"
        );
        assert_eq!(
            ShippingError::Validation("min".to_string()).code(),
            "validation_error"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let converted: ShippingError = err.into();
        assert_eq!(converted.code(), "serialization_error");
    }
}
