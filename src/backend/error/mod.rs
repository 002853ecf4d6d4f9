//! Backend Error Module
//!
//! Error types used by HTTP handlers and by server startup.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and StartupError definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, producing a JSON body
//! `{"error": ..., "status": ...}` with the mapped status code.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use conversion::json_with_status;
pub use types::{BackendError, StartupError};
