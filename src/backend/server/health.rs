/**
 * Health and Service Index
 *
 * `GET /health` reports whether the database answers; `GET /` describes the
 * service and its routes.
 */

use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use sqlx::PgPool;

/// Upper bound on the health ping
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    pub details: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check handler
///
/// 200 when `SELECT 1` completes within two seconds, 503 otherwise.
pub async fn health_check(State(pool): State<PgPool>) -> Response {
    let ping = tokio::time::timeout(
        HEALTH_CHECK_TIMEOUT,
        sqlx::query("SELECT 1").execute(&pool),
    )
    .await;

    let failure = match ping {
        Ok(Ok(_)) => None,
        Ok(Err(e)) => Some(e.to_string()),
        Err(_) => Some(format!("no answer within {:?}", HEALTH_CHECK_TIMEOUT)),
    };

    match failure {
        None => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                details: "All systems operational",
                error: None,
            }),
        )
            .into_response(),
        Some(error) => {
            tracing::warn!("Health check failed: {}", error);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    details: "Database connection failed",
                    error: Some(error),
                }),
            )
                .into_response()
        }
    }
}

/// Service index handler
pub async fn service_index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "routes": {
            "public": [
                "GET /",
                "GET /health",
                "POST /admin/signup",
                "POST /admin/login",
                "GET /blogs",
                "GET /blogs/{id}",
                "GET /uploads/{file}",
            ],
            "admin": [
                "GET /admin/dashboard",
                "POST /admin/blogs",
                "PUT /admin/blogs/{id}",
                "DELETE /admin/blogs/{id}",
            ],
        },
    }))
}
