/**
 * Backend Error Types
 *
 * This module defines the error taxonomy used by HTTP handlers and the
 * errors that abort server startup.
 *
 * # Error Categories
 *
 * | Variant            | Status | Raised when                                  |
 * |--------------------|--------|----------------------------------------------|
 * | `Validation`       | 400    | Malformed or missing input                   |
 * | `Authentication`   | 401    | Missing/invalid token, bad credentials       |
 * | `Authorization`    | 403    | Valid identity that does not own the row     |
 * | `NotFound`         | 404    | Row does not exist                           |
 * | `Infrastructure`   | 500    | Database, filesystem or hashing failure      |
 *
 * Database and I/O errors convert through `From`, so handlers can use `?`.
 * Their driver text is never sent to clients; `message()` returns a generic
 * string for them and the details go to the log.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::server::config::ConfigError;
use crate::shared::SharedError;

/// Generic message for every 500 response
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// HTTP-facing error type returned by every handler
///
/// # Usage
///
/// ```rust
/// use starlink_blog::backend::error::BackendError;
///
/// let err = BackendError::not_found("Blog not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed or missing input
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Missing, malformed, invalid or expired credentials
    #[error("Authentication error: {message}")]
    Authentication {
        /// Human-readable error message
        message: String,
    },

    /// Authenticated, but not allowed to touch this resource
    #[error("Authorization error: {message}")]
    Authorization {
        /// Human-readable error message
        message: String,
    },

    /// The addressed resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// A collaborator (hashing, token signing, ...) failed
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Operator-facing detail; not sent to clients
        message: String,
    },

    /// Input validation error from the shared module
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::Authorization {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::Infrastructure {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Authentication { .. } => StatusCode::UNAUTHORIZED,
            Self::Authorization { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Infrastructure { .. } | Self::Database(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    ///
    /// Infrastructure failures all collapse to one generic message.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Authentication { message }
            | Self::Authorization { message }
            | Self::NotFound { message } => message.clone(),
            Self::SharedError(err) => err.message().to_string(),
            Self::Infrastructure { .. } | Self::Database(_) | Self::Io(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// The rejected input field, for input validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::SharedError(err) => err.field(),
            _ => None,
        }
    }
}

/// Errors that abort server startup
///
/// There is no degraded mode: any of these is logged and the process exits.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("database did not answer within {0:?}")]
    DatabaseTimeout(std::time::Duration),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
