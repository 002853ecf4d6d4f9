/**
 * Dashboard Handler
 *
 * GET /admin/dashboard, the smallest gated endpoint. Clients call it to
 * check that a stored token is still accepted.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::DashboardResponse;
use crate::backend::middleware::AuthAdmin;

/// Dashboard handler
///
/// Runs behind `require_admin`, so a missing or bad token never gets here.
///
/// # Example Response
///
/// ```json
/// {"message": "Welcome to admin dashboard", "adminID": 1}
/// ```
pub async fn dashboard(AuthAdmin(admin): AuthAdmin) -> Json<DashboardResponse> {
    tracing::debug!("Dashboard requested by admin {}", admin.admin_id);

    Json(DashboardResponse {
        message: "Welcome to admin dashboard",
        admin_id: admin.admin_id,
    })
}
