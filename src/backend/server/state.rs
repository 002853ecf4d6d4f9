/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The PostgreSQL connection pool
 * - Session token keys (read-only after startup)
 * - The upload store (a directory path)
 *
 * Nothing here is mutated after startup, so there are no locks.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only what they use:
 *
 * ```rust,ignore
 * async fn handler(State(pool): State<PgPool>) { /* ... */ }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::blogs::uploads::UploadStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub sessions: Arc<SessionKeys>,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(db_pool: PgPool, sessions: SessionKeys, uploads: UploadStore) -> Self {
        Self {
            db_pool,
            sessions: Arc::new(sessions),
            uploads,
        }
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<SessionKeys> {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for UploadStore {
    fn from_ref(state: &AppState) -> Self {
        state.uploads.clone()
    }
}
