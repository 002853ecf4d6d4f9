//! Shared Module
//!
//! Transport-agnostic pieces used by the HTTP layer: input validation rules
//! and the validation error type. Nothing in here knows about axum, sqlx or
//! the filesystem.

/// Shared error types
pub mod error;

/// Input validation rules
pub mod validation;

pub use error::SharedError;
