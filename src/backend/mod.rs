//! Backend Module
//!
//! All server-side code: an Axum HTTP server backed by PostgreSQL and a
//! local upload directory.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, startup, health
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Admin accounts, passwords, JWT sessions, signup/login
//! - **`blogs`** - Blog queries, image storage, blog handlers
//! - **`middleware`** - Bearer-token gate and CORS
//! - **`error`** - Backend error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── blogs/          - Blog posts and uploads
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the connection pool, the session keys and the upload
//! store. None of them change after startup, so handlers share them without
//! locks.
//!
//! # Request Flow
//!
//! ```text
//! request → TraceLayer → CORS → [require_admin] → handler → BackendError | JSON
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and admin management
pub mod auth;

/// Blog posts and image uploads
pub mod blogs;

/// Middleware for request processing
pub mod middleware;

pub use error::{BackendError, StartupError};
pub use server::create_app;
