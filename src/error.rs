//! Custom error types for Cashly
//!
//! This module defines the error hierarchy for the client core using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Cashly operations
#[derive(Error, Debug)]
pub enum CashlyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The API answered with an error envelope
    #[error("API error: {0}")]
    Api(String),

    /// A payload did not match any known response shape
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Notification socket errors
    #[error("Socket error: {0}")]
    Socket(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl CashlyError {
    /// Create a "not found" error for dashboard widgets
    pub fn widget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Widget",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the server reported this error through its envelope
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

impl From<std::io::Error> for CashlyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashlyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Cashly operations
pub type CashlyResult<T> = Result<T, CashlyError>;
