/**
 * Public Blog Handlers
 *
 * GET /blogs and GET /blogs/{id}. No authentication.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::PgPool;

use crate::backend::blogs::db;
use crate::backend::blogs::handlers::types::BlogResponse;
use crate::backend::error::BackendError;
use crate::shared::validation::parse_blog_id;

pub const BLOG_NOT_FOUND_MESSAGE: &str = "Blog not found";

/// List every post, newest first
pub async fn list_blogs(State(pool): State<PgPool>) -> Result<Json<Vec<BlogResponse>>, BackendError> {
    let rows = db::list_blogs(&pool).await?;
    tracing::debug!("Listing {} blogs", rows.len());
    Ok(Json(rows.into_iter().map(BlogResponse::from).collect()))
}

/// Fetch one post
///
/// # Errors
///
/// * `400 Bad Request` - id is not a positive integer
/// * `404 Not Found` - no post with that id
pub async fn get_blog(
    State(pool): State<PgPool>,
    Path(raw_id): Path<String>,
) -> Result<Json<BlogResponse>, BackendError> {
    let id = parse_blog_id(&raw_id)?;

    let row = db::get_blog(&pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found(BLOG_NOT_FOUND_MESSAGE))?;

    Ok(Json(BlogResponse::from(row)))
}
