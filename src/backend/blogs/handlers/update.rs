/**
 * Update Blog Handler
 *
 * PUT /admin/blogs/{id} (behind `require_admin`). Every form part is
 * optional; absent parts keep their stored value.
 *
 * # Process
 *
 * 1. Parse id, load the post, check ownership
 * 2. Read and validate the provided parts
 * 3. Store a replacement image, if any
 * 4. Update the row; on failure remove the replacement
 * 5. Remove the previous image (failure is only logged)
 */

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        Path, State,
    },
    response::Json,
};
use sqlx::PgPool;

use crate::backend::blogs::db::{self, BlogChanges};
use crate::backend::blogs::handlers::form::{accept_multipart, read_blog_form};
use crate::backend::blogs::handlers::read::BLOG_NOT_FOUND_MESSAGE;
use crate::backend::blogs::handlers::types::BlogResponse;
use crate::backend::blogs::uploads::UploadStore;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthAdmin;
use crate::shared::validation::{parse_blog_id, validate_content, validate_title};

/// Update a post owned by the authenticated admin
///
/// # Errors
///
/// * `400 Bad Request` - Bad id, short title/content, disallowed image
/// * `403 Forbidden` - Post belongs to another admin
/// * `404 Not Found` - No such post
/// * `500 Internal Server Error` - Storage or database failure
pub async fn update_blog(
    State(pool): State<PgPool>,
    State(uploads): State<UploadStore>,
    AuthAdmin(admin): AuthAdmin,
    Path(raw_id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<BlogResponse>, BackendError> {
    let id = parse_blog_id(&raw_id)?;

    let existing = db::get_blog(&pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found(BLOG_NOT_FOUND_MESSAGE))?;

    if existing.admin_id != admin.admin_id {
        tracing::warn!(
            "Admin {} tried to update blog {} owned by {}",
            admin.admin_id,
            id,
            existing.admin_id
        );
        return Err(BackendError::authorization("Not authorized to update this blog"));
    }

    let form = read_blog_form(accept_multipart(multipart)?).await?;
    if let Some(title) = &form.title {
        validate_title(title)?;
    }
    if let Some(content) = &form.content {
        validate_content(content)?;
    }

    let new_image = match &form.image {
        Some(image) => Some(uploads.save(&image.extension, &image.bytes).await?),
        None => None,
    };

    let changes = BlogChanges {
        title: form.title.map(|title| title.trim().to_string()),
        content: form.content,
        image: new_image.clone(),
    };

    let updated = db::update_blog(&pool, id, admin.admin_id, &changes).await;
    let row = match updated {
        Ok(Some(row)) => row,
        Ok(None) => {
            discard_upload(&uploads, new_image.as_deref()).await;
            return Err(BackendError::not_found(BLOG_NOT_FOUND_MESSAGE));
        }
        Err(e) => {
            discard_upload(&uploads, new_image.as_deref()).await;
            return Err(e.into());
        }
    };

    if new_image.is_some() {
        if let Some(old) = existing.image.as_deref() {
            if let Err(e) = uploads.remove(old).await {
                tracing::warn!("Blog {} updated but old image {} was not removed: {}", id, old, e);
            }
        }
    }

    tracing::info!("Blog {} updated by admin {}", id, admin.admin_id);

    Ok(Json(BlogResponse::from(row)))
}

async fn discard_upload(uploads: &UploadStore, file_name: Option<&str>) {
    if let Some(name) = file_name {
        if let Err(e) = uploads.remove(name).await {
            tracing::warn!("Failed to remove unused upload {}: {}", name, e);
        }
    }
}
