/**
 * Create Blog Handler
 *
 * POST /admin/blogs (behind `require_admin`).
 *
 * # Process
 *
 * 1. Read the multipart form into memory
 * 2. Validate title, content and image
 * 3. Store the image as `<uuid>.<ext>`
 * 4. Insert the row; if that fails, remove the stored image
 */

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    http::StatusCode,
    response::Response,
};
use sqlx::PgPool;

use crate::backend::blogs::db;
use crate::backend::blogs::handlers::form::{accept_multipart, read_blog_form};
use crate::backend::blogs::handlers::types::BlogResponse;
use crate::backend::blogs::uploads::UploadStore;
use crate::backend::error::{json_with_status, BackendError};
use crate::backend::middleware::AuthAdmin;
use crate::shared::validation::{validate_content, validate_title};
use crate::shared::SharedError;

/// Create a post owned by the authenticated admin
///
/// # Errors
///
/// * `400 Bad Request` - Missing/short title or content, missing image,
///   disallowed extension, empty file, body over 8 MiB
/// * `401 Unauthorized` - Raised by the gate before this runs
/// * `500 Internal Server Error` - Image could not be stored or row inserted
pub async fn create_blog(
    State(pool): State<PgPool>,
    State(uploads): State<UploadStore>,
    AuthAdmin(admin): AuthAdmin,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, BackendError> {
    let form = read_blog_form(accept_multipart(multipart)?).await?;

    let title = form.title.unwrap_or_default();
    let content = form.content.unwrap_or_default();
    validate_title(&title)?;
    validate_content(&content)?;
    let image = form
        .image
        .ok_or_else(|| SharedError::upload("Image is required"))?;

    let file_name = uploads.save(&image.extension, &image.bytes).await?;

    let row = match db::insert_blog(&pool, title.trim(), &content, &file_name, admin.admin_id).await {
        Ok(row) => row,
        Err(e) => {
            if let Err(cleanup) = uploads.remove(&file_name).await {
                tracing::warn!("Failed to remove orphaned upload {}: {}", file_name, cleanup);
            }
            return Err(e.into());
        }
    };

    tracing::info!("Blog {} created by admin {}", row.id, admin.admin_id);

    Ok(json_with_status(StatusCode::CREATED, BlogResponse::from(row)))
}
