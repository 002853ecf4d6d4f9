//! In-process HTTP helpers
//!
//! Builds the real router around a given pool and a temporary upload
//! directory, and drives it with `tower::ServiceExt::oneshot`, so no socket
//! is opened.

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use starlink_blog::backend::auth::sessions::SessionKeys;
use starlink_blog::backend::blogs::UploadStore;
use starlink_blog::backend::routes::create_router;
use starlink_blog::backend::server::config::CorsConfig;
use starlink_blog::backend::server::state::AppState;

use super::auth_helpers::{auth_header, TEST_JWT_SECRET};
use super::database::unreachable_pool;

const MULTIPART_BOUNDARY: &str = "starlink-test-boundary";

/// The application under test
pub struct TestApp {
    pub router: Router,
    pub sessions: Arc<SessionKeys>,
    pub uploads: TempDir,
}

impl TestApp {
    /// Build the app around `pool`
    pub async fn new(pool: PgPool) -> Self {
        Self::with_cors(pool, &CorsConfig::permissive()).await
    }

    /// Build the app with no usable database
    pub async fn offline() -> Self {
        Self::new(unreachable_pool()).await
    }

    /// Build the app with a specific CORS policy
    pub async fn with_cors(pool: PgPool, cors: &CorsConfig) -> Self {
        let uploads = TempDir::new().expect("Failed to create upload dir");
        let store = UploadStore::new(uploads.path())
            .await
            .expect("Failed to open upload store");

        let state = AppState::new(pool, SessionKeys::from_secret(TEST_JWT_SECRET), store);
        let sessions = state.sessions.clone();
        let router = create_router(state, cors);

        Self {
            router,
            sessions,
            uploads,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        self.uploads.path()
    }

    /// Number of files currently in the upload directory
    pub fn upload_count(&self) -> usize {
        std::fs::read_dir(self.uploads.path())
            .expect("Failed to read upload dir")
            .count()
    }

    /// Token for an arbitrary admin id, signed with the app's key
    pub fn token_for(&self, admin_id: u64) -> String {
        self.sessions
            .issue(admin_id)
            .expect("Failed to create test token")
    }

    /// Send one request through the router
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("Failed to build request"),
        )
        .await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(Method::DELETE).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, auth_header(token));
        }
        self.send(builder.body(Body::empty()).expect("Failed to build request"))
            .await
    }

    pub async fn multipart(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        form: MultipartForm,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, MultipartForm::content_type());
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, auth_header(token));
        }
        self.send(
            builder
                .body(Body::from(form.into_bytes()))
                .expect("Failed to build request"),
        )
        .await
    }
}

/// Captured response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("Response is not JSON ({e}): {}", self.text()))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Minimal multipart/form-data body builder
#[derive(Default)]
pub struct MultipartForm {
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_type() -> String {
        format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}")
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

/// A complete, valid blog form with a PNG image
pub fn valid_blog_form() -> MultipartForm {
    MultipartForm::new()
        .text("title", "Starship flight test")
        .text("content", "The booster was caught by the tower arms.")
        .file("image", "photo.png", b"\x89PNG\r\n\x1a\nfake image data")
}
