/**
 * Authentication Middleware
 *
 * This module provides the gate in front of every bearer-only `/admin` route.
 * It extracts and verifies the bearer token from the Authorization header
 * and hands the admin id to handlers.
 *
 * The gate runs before any body is read, so an unauthenticated upload
 * never reaches the multipart parser or the upload directory.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{SessionKeys, INVALID_TOKEN_MESSAGE};
use crate::backend::error::BackendError;

const MISSING_TOKEN_MESSAGE: &str = "Authentication required";

/// Authenticated admin identity attached to the request by `require_admin`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub admin_id: i64,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from `Authorization: Bearer <token>`
/// 2. Verifies signature and expiry
/// 3. Normalizes the `admin_id` claim
/// 4. Attaches `AuthenticatedAdmin` to request extensions
///
/// Returns 401 with "Authentication required" when the header is absent
/// or not a bearer header, and "Invalid or expired token" otherwise.
pub async fn require_admin(
    State(sessions): State<Arc<SessionKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers().get(AUTHORIZATION).and_then(|h| h.to_str().ok()))?;

    let admin_id = sessions.verify(token).and_then(|id| {
        i64::try_from(id).map_err(|_| {
            tracing::warn!("admin_id claim out of range: {}", id);
            BackendError::authentication(INVALID_TOKEN_MESSAGE)
        })
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedAdmin { admin_id });

    Ok(next.run(request).await)
}

fn bearer_token(header: Option<&str>) -> Result<&str, BackendError> {
    let header = header.ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        BackendError::authentication(MISSING_TOKEN_MESSAGE)
    })?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::authentication(MISSING_TOKEN_MESSAGE)
        })
}

/// Axum extractor for the authenticated admin
///
/// Only valid behind `require_admin`; anywhere else it rejects with 401.
#[derive(Clone, Copy, Debug)]
pub struct AuthAdmin(pub AuthenticatedAdmin);

impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedAdmin>()
            .copied()
            .map(AuthAdmin)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedAdmin not found in request extensions");
                BackendError::authentication(MISSING_TOKEN_MESSAGE)
            })
    }
}
