/**
 * Server Initialization
 *
 * This module builds the Axum application from a loaded `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the connection pool, ping it, run migrations
 * 2. Create the upload directory
 * 3. Derive session keys from the JWT secret
 * 4. Create and configure the router
 *
 * Every step is fatal on failure; there is no degraded mode.
 */

use axum::Router;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::blogs::uploads::UploadStore;
use crate::backend::error::StartupError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `StartupError` if the database is unreachable, migrations fail,
/// or the upload directory cannot be created.
pub async fn create_app(config: &ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing blog backend server");

    let db_pool = load_database(&config.database).await?;

    let uploads = UploadStore::new(&config.upload_dir).await.map_err(|e| {
        tracing::error!(
            "Could not create upload directory {}: {}",
            config.upload_dir.display(),
            e
        );
        e
    })?;

    let sessions = SessionKeys::from_secret(config.jwt_secret.as_bytes());

    let app_state = AppState::new(db_pool, sessions, uploads);
    let app = create_router(app_state, &config.cors);

    tracing::info!("Router configured");

    Ok(app)
}
