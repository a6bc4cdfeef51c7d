//! Custom error types for wtrack.
//!
//! This module provides structured error types that enable better
//! error handling, reporting, and recovery throughout the application.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wtrack operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Input rejected by validation
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Writing a document to the store failed
    #[error("Store error: {message}")]
    Store {
        message: String,
        path: Option<PathBuf>,
    },

    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrackerError {
    // =========================================================================
    // Constructor helpers
    // =========================================================================

    /// Create a validation error naming the offending field
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            path: None,
        }
    }

    /// Create a store error with the slot path
    pub fn store_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Store {
            message: message.into(),
            path: Some(path),
        }
    }

    // =========================================================================
    // Classification helpers
    // =========================================================================

    /// Check if this error is a user-input rejection
    ///
    /// Validation errors never mutate state: the caller can retry with
    /// corrected input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Get error code for exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => 2,
            Self::Store { .. } => 3,
            _ => 1,
        }
    }
}

/// Type alias for wtrack results
pub type Result<T> = std::result::Result<T, TrackerError>;
