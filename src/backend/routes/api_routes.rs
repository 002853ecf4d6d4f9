/**
 * API Route Handlers
 *
 * This module registers the admin and blog endpoints.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /admin/signup` - Admin registration
 * - `POST /admin/login` - Admin login
 *
 * ## Blogs (public)
 * - `GET /blogs` - List posts
 * - `GET /blogs/{id}` - Fetch one post
 *
 * ## Admin (bearer token required)
 * - `GET /admin/dashboard` - Token check
 * - `POST /admin/blogs` - Create post
 * - `PUT /admin/blogs/{id}` - Update own post
 * - `DELETE /admin/blogs/{id}` - Delete own post
 */

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{dashboard, login, signup};
use crate::backend::blogs::handlers::form::MAX_UPLOAD_BYTES;
use crate::backend::blogs::handlers::{create_blog, delete_blog, get_blog, list_blogs, update_blog};
use crate::backend::middleware::require_admin;
use crate::backend::server::state::AppState;

/// Routes registered by `configure_api_routes`, for the startup log
pub const API_ROUTES: [&str; 8] = [
    "POST /admin/signup",
    "POST /admin/login",
    "GET /blogs",
    "GET /blogs/{id}",
    "GET /admin/dashboard",
    "POST /admin/blogs",
    "PUT /admin/blogs/{id}",
    "DELETE /admin/blogs/{id}",
];

/// Configure API routes
///
/// The admin routes sit behind `require_admin` as a route layer, so the
/// token is checked before any handler extractor reads the body. Their body
/// limit is raised to 8 MiB for image uploads.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/admin/dashboard", get(dashboard))
        .route("/admin/blogs", post(create_blog))
        .route("/admin/blogs/{id}", put(update_blog).delete(delete_blog))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), require_admin))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    router
        .route("/admin/signup", post(signup))
        .route("/admin/login", post(login))
        .route("/blogs", get(list_blogs))
        .route("/blogs/{id}", get(get_blog))
        .merge(admin_routes)
}
