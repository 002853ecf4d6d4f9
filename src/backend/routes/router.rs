/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * From outermost to innermost:
 * 1. `TraceLayer` - request spans
 * 2. CORS - preflight answers and response headers
 * 3. Routes (the admin blog routes add their own auth gate)
 */

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::blogs::uploads::UPLOADS_URL_PREFIX;
use crate::backend::middleware::setup_cors;
use crate::backend::routes::api_routes::{configure_api_routes, API_ROUTES};
use crate::backend::server::config::CorsConfig;
use crate::backend::server::health::{health_check, service_index};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// 1. **Service Routes**: `GET /`, `GET /health`
/// 2. **API Routes**: admin auth and blog endpoints
/// 3. **Uploads**: stored images under `/uploads`
/// 4. **Fallback Handler**: JSON 404
///
/// # Arguments
///
/// * `app_state` - Application state (pool, session keys, upload store)
/// * `cors` - Cross-origin policy
pub fn create_router(app_state: AppState, cors: &CorsConfig) -> Router {
    let uploads_dir = app_state.uploads.dir().to_path_buf();

    let router = Router::new()
        .route("/", get(service_index))
        .route("/health", get(health_check));

    let router = configure_api_routes(router, &app_state);

    let router = router
        .nest_service(UPLOADS_URL_PREFIX, ServeDir::new(&uploads_dir))
        .fallback(route_not_found)
        .layer(setup_cors(cors))
        .layer(TraceLayer::new_for_http());

    log_routes(&uploads_dir);

    router.with_state(app_state)
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Route not found", "status": 404 })),
    )
}

fn log_routes(uploads_dir: &std::path::Path) {
    tracing::info!("Registered routes:");
    tracing::info!("  GET /");
    tracing::info!("  GET /health");
    for route in API_ROUTES {
        tracing::info!("  {}", route);
    }
    tracing::info!("  GET {}/* -> {}", UPLOADS_URL_PREFIX, uploads_dir.display());
}
