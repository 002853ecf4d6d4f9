//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, static uploads, global layers
//! - **`api_routes`** - Admin auth and blog endpoints
//!
//! # Example
//!
//! ```rust,ignore
//! use starlink_blog::backend::routes::create_router;
//!
//! let router = create_router(app_state, &config.cors);
//! ```

/// Main router creation
pub mod router;

/// API endpoint registration
pub mod api_routes;

pub use router::create_router;
