//! Authentication Module
//!
//! Admin accounts, password hashing, session tokens and the signup/login
//! handlers.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── admins.rs       - Admin model and database operations
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - JWT issuance and verification
//! └── handlers/       - HTTP handlers (signup, login, dashboard)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username, email and password → admin row created
//! 2. **Login**: email and password verified → 24-hour JWT returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` checked by
//!    `middleware::auth::require_admin`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless; there is no revocation list
//! - Credential failures return one 401 message (no account enumeration)

/// Admin data model and database operations
pub mod admins;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{dashboard, login, signup};
pub use sessions::{AdminId, SessionKeys};
