/**
 * Login Handler
 *
 * This module implements admin authentication for POST /admin/login.
 *
 * # Authentication Process
 *
 * 1. Look up admin by email
 * 2. Verify password using bcrypt
 * 3. Issue a 24-hour session token
 * 4. Return token and admin info
 *
 * Unknown email and wrong password produce the same 401 body, and both run
 * a bcrypt verification.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use sqlx::PgPool;

use crate::backend::auth::admins::get_admin_by_email;
use crate::backend::auth::handlers::types::{AdminResponse, AuthResponse, LoginRequest};
use crate::backend::auth::password::{verify_against_dummy, verify_password};
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::BackendError;

/// Shared by every credential failure
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or empty email/password
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Database query or token signing failed
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "admin": {"id": 1, "email": "editor@example.com"}
/// }
/// ```
pub async fn login(
    State(pool): State<PgPool>,
    State(sessions): State<Arc<SessionKeys>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected login body: {}", e.body_text());
        BackendError::validation("Invalid input")
    })?;

    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(BackendError::validation("Email and password are required"));
    }

    tracing::info!("Login request for: {}", request.email);

    let Some(admin) = get_admin_by_email(&pool, &request.email).await? else {
        verify_against_dummy(&request.password).await;
        tracing::warn!("Login failed: unknown email");
        return Err(BackendError::authentication(INVALID_CREDENTIALS_MESSAGE));
    };

    if !verify_password(&admin.password_hash, &request.password).await {
        tracing::warn!("Login failed: wrong password for admin {}", admin.id);
        return Err(BackendError::authentication(INVALID_CREDENTIALS_MESSAGE));
    }

    let admin_id = u64::try_from(admin.id)
        .map_err(|_| BackendError::infrastructure(format!("negative admin id {}", admin.id)))?;
    let token = sessions.issue(admin_id)?;

    tracing::info!("Admin logged in successfully: {}", admin.id);

    Ok(Json(AuthResponse {
        token,
        admin: AdminResponse {
            id: admin.id,
            email: admin.email,
        },
    }))
}
