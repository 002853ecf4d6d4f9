//! Authentication Handlers Module
//!
//! HTTP handlers for the public admin endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - Admin registration handler
//! ├── login.rs    - Admin authentication handler
//! └── dashboard.rs - Token check for signed-in admins
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /admin/signup - Admin registration
//! - **`login`** - POST /admin/login - Admin authentication
//! - **`dashboard`** - GET /admin/dashboard - Bearer token required

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Dashboard handler
pub mod dashboard;

pub use dashboard::dashboard;
pub use login::login;
pub use signup::signup;
pub use types::{AdminResponse, AuthResponse, DashboardResponse, LoginRequest, SignupRequest, SignupResponse};
