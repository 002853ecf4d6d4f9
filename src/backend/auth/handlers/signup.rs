/**
 * Signup Handler
 *
 * This module implements admin registration for POST /admin/signup.
 *
 * # Registration Process
 *
 * 1. Validate username, email format and password length
 * 2. Reject an email that is already registered
 * 3. Hash password using bcrypt
 * 4. Create admin in database
 *
 * A concurrent signup with the same email can pass step 2; the unique
 * constraint then fires in step 4 and is reported the same way.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Json, Response},
};
use sqlx::PgPool;

use crate::backend::auth::admins::{create_admin, get_admin_by_email, is_unique_violation};
use crate::backend::auth::handlers::types::{AdminResponse, SignupRequest, SignupResponse};
use crate::backend::auth::password::hash_password;
use crate::backend::error::{json_with_status, BackendError};
use crate::shared::validation::{validate_email, validate_password, validate_username};

const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body, invalid field, or email already registered
/// * `500 Internal Server Error` - Hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /admin/signup HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "editor", "email": "editor@example.com", "password": "s3cret!"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"message": "Admin registered successfully", "admin": {"id": 1, "email": "editor@example.com"}}
/// ```
pub async fn signup(
    State(pool): State<PgPool>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Response, BackendError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected signup body: {}", e.body_text());
        BackendError::validation("Invalid input")
    })?;

    validate_username(&request.username)?;
    validate_email(&request.email)?;
    validate_password(&request.password)?;

    tracing::info!("Signup request for email: {}", request.email);

    if get_admin_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::validation(EMAIL_TAKEN_MESSAGE));
    }

    let password_hash = hash_password(&request.password).await?;

    let admin = create_admin(&pool, request.username.trim(), &request.email, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Email registered concurrently: {}", request.email);
                BackendError::validation(EMAIL_TAKEN_MESSAGE)
            } else {
                BackendError::from(e)
            }
        })?;

    tracing::info!("Admin created successfully: {} ({})", admin.id, admin.email);

    Ok(json_with_status(
        StatusCode::CREATED,
        SignupResponse {
            message: "Admin registered successfully",
            admin: AdminResponse {
                id: admin.id,
                email: admin.email,
            },
        },
    ))
}
