//! Shared Error Types
//!
//! This module defines the input-validation errors raised while checking
//! request payloads. They carry the offending field so handlers can log it,
//! and convert into `BackendError` (400 Bad Request) at the HTTP boundary.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field failed a shape or length rule
//! - `UploadError` - An uploaded file was rejected (extension, size, emptiness)
//!
//! # Usage
//!
//! ```rust
//! use starlink_blog::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Invalid email format");
//! assert_eq!(error.message(), "Invalid email format");
//! ```
use thiserror::Error;

/// Errors produced while validating client input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A request field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// An uploaded file was rejected
    #[error("Upload error: {message}")]
    UploadError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new upload error
    pub fn upload(message: impl Into<String>) -> Self {
        Self::UploadError {
            message: message.into(),
        }
    }

    /// The client-facing message, without the field prefix
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
            Self::UploadError { message } => message,
        }
    }

    /// The field this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::UploadError { .. } => Some("image"),
        }
    }
}
