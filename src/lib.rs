//! Starlink Blog - Main Library
//!
//! Admin-facing HTTP API for a small blog: admins sign up and log in,
//! then create, update and delete posts with an attached image. Posts are
//! readable by anyone.
//!
//! # Module Structure
//!
//! - **`shared`** - Input validation rules and their error type
//!
//! - **`backend`** - Axum server
//!   - Configuration, state and startup
//!   - Admin accounts, bcrypt passwords, JWT sessions
//!   - Blog storage (PostgreSQL) and image uploads (local directory)
//!   - Routing, CORS and the bearer-token gate
//!
//! # Usage
//!
//! ```rust,no_run
//! use starlink_blog::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures
//! - `backend::error::BackendError` for everything a handler can return
//! - `backend::error::StartupError` for fatal startup failures

/// Shared validation rules and error types
pub mod shared;

/// Backend server-side code
pub mod backend;
