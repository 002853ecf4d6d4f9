//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token gate for the admin blog routes
//! - **`cors`** - Cross-origin policy built from configuration

pub mod auth;
pub mod cors;

pub use auth::{require_admin, AuthAdmin, AuthenticatedAdmin};
pub use cors::setup_cors;
