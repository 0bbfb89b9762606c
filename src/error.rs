//! Custom error types for receipt-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for receipt-cli operations
#[derive(Error, Debug)]
pub enum ReceiptError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The in-progress receipt is not submittable
    #[error("Validation error: {0}")]
    Validation(String),

    /// An amount that cannot be parsed or rendered
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Receipt counter errors
    #[error("Counter error: {0}")]
    Counter(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ReceiptError {
    /// Create a "not found" error for receipts
    pub fn receipt_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Receipt",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for donation categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Donation category",
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
}

impl From<std::io::Error> for ReceiptError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReceiptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for receipt-cli operations
pub type ReceiptResult<T> = Result<T, ReceiptError>;
