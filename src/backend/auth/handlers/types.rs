/**
 * Authentication Handler Types
 *
 * Request and response bodies for the signup and login handlers.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
///
/// Missing fields deserialize as empty strings so they fail validation with
/// a field-specific message instead of a generic parse error.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignupRequest {
    /// Display name (at least 3 chars)
    #[serde(default)]
    pub username: String,
    /// Login email
    #[serde(default)]
    pub email: String,
    /// Plaintext password (at least 6 chars, hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Admin information safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AdminResponse {
    pub id: i64,
    pub email: String,
}

/// Signup response
#[derive(Serialize, Debug)]
pub struct SignupResponse {
    pub message: &'static str,
    pub admin: AdminResponse,
}

/// Login response
///
/// Contains the session token (24-hour expiry) and the admin it belongs to.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub admin: AdminResponse,
}

/// Dashboard response
#[derive(Serialize, Debug)]
pub struct DashboardResponse {
    pub message: &'static str,
    #[serde(rename = "adminID")]
    pub admin_id: i64,
}
