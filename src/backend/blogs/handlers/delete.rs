/**
 * Delete Blog Handler
 *
 * DELETE /admin/blogs/{id} (behind `require_admin`). The row goes first;
 * the image file is removed afterwards on a best-effort basis.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::PgPool;

use crate::backend::blogs::db;
use crate::backend::blogs::handlers::read::BLOG_NOT_FOUND_MESSAGE;
use crate::backend::blogs::handlers::types::DeleteResponse;
use crate::backend::blogs::uploads::UploadStore;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthAdmin;
use crate::shared::validation::parse_blog_id;

/// Delete a post owned by the authenticated admin
///
/// A failure to remove the image file does not fail the request; it is
/// reported in `image_cleanup_error`.
pub async fn delete_blog(
    State(pool): State<PgPool>,
    State(uploads): State<UploadStore>,
    AuthAdmin(admin): AuthAdmin,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteResponse>, BackendError> {
    let id = parse_blog_id(&raw_id)?;

    let existing = db::get_blog(&pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found(BLOG_NOT_FOUND_MESSAGE))?;

    if existing.admin_id != admin.admin_id {
        tracing::warn!(
            "Admin {} tried to delete blog {} owned by {}",
            admin.admin_id,
            id,
            existing.admin_id
        );
        return Err(BackendError::authorization("Not authorized to delete this blog"));
    }

    let image = db::delete_blog(&pool, id, admin.admin_id)
        .await?
        .ok_or_else(|| BackendError::not_found(BLOG_NOT_FOUND_MESSAGE))?;

    tracing::info!("Blog {} deleted by admin {}", id, admin.admin_id);

    let mut image_cleanup_error = None;
    if let Some(file_name) = image.as_deref() {
        if let Err(e) = uploads.remove(file_name).await {
            tracing::warn!("Blog {} deleted but image {} was not removed: {}", id, file_name, e);
            image_cleanup_error = Some(format!("Failed to remove image: {e}"));
        }
    }

    Ok(Json(DeleteResponse {
        message: "Blog deleted successfully".to_string(),
        image_cleanup_error,
    }))
}
