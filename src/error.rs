//! Custom error types for FleetLog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for FleetLog operations
#[derive(Error, Debug)]
pub enum FleetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models (odometer ordering violations)
    #[error("Validation error: {0}")]
    Validation(String),

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

    /// Persistence failures in the storage layer. The only error category
    /// that aborts an operation rather than being retryable with corrected
    /// input.
    #[error("Failed to persist: {0}")]
    Persist(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FleetError {
    /// Create a "not found" error for vehicles
    pub fn vehicle_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Vehicle",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for usage records
    pub fn usage_record_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Usage record",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for vehicles
    pub fn vehicle_exists(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Vehicle",
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

    /// Check if this is a persistence failure
    pub fn is_persist(&self) -> bool {
        matches!(self, Self::Persist(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FleetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FleetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FleetLog operations
pub type FleetResult<T> = Result<T, FleetError>;
