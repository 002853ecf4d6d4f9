/**
 * Blog Multipart Form
 *
 * Reads the `title`, `content` and `image` parts of a create or update
 * request into memory. Nothing is written to disk here; the image bytes are
 * held until every field has been validated.
 */

use axum::{
    extract::multipart::{Field, Multipart, MultipartError, MultipartRejection},
    http::StatusCode,
};
use bytes::Bytes;

use crate::backend::error::BackendError;
use crate::shared::validation::image_extension;
use crate::shared::SharedError;

/// Request body size limit for blog routes
pub const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

const TOO_LARGE_MESSAGE: &str = "File too large (max 8MB)";

/// An uploaded image that passed the extension check
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Lower-cased extension without the dot
    pub extension: String,
    pub bytes: Bytes,
}

/// Parsed blog form; every part is optional at this stage
#[derive(Debug, Default)]
pub struct BlogForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<ImageUpload>,
}

fn multipart_error(e: MultipartError) -> BackendError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!("Upload rejected: body exceeds {} bytes", MAX_UPLOAD_BYTES);
        BackendError::validation(TOO_LARGE_MESSAGE)
    } else {
        tracing::warn!("Malformed multipart body: {}", e.body_text());
        BackendError::validation("Invalid multipart form")
    }
}

/// Unwrap the `Multipart` extractor, turning a wrong content type into a 400
pub fn accept_multipart(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Multipart, BackendError> {
    multipart.map_err(|e| {
        tracing::warn!("Rejected blog form: {}", e.body_text());
        BackendError::validation("Expected multipart/form-data body")
    })
}

async fn read_image(field: Field<'_>) -> Result<Option<ImageUpload>, BackendError> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    let bytes = field.bytes().await.map_err(multipart_error)?;

    // Browsers send an empty, unnamed part when no file was chosen
    if file_name.is_empty() && bytes.is_empty() {
        return Ok(None);
    }

    let extension = image_extension(&file_name)?;
    if bytes.is_empty() {
        return Err(SharedError::upload("Uploaded image is empty").into());
    }

    Ok(Some(ImageUpload { extension, bytes }))
}

/// Read every known part of the form
///
/// Unknown parts are skipped. A repeated part keeps its last value.
pub async fn read_blog_form(mut multipart: Multipart) -> Result<BlogForm, BackendError> {
    let mut form = BlogForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => form.title = Some(field.text().await.map_err(multipart_error)?),
            "content" => form.content = Some(field.text().await.map_err(multipart_error)?),
            "image" => {
                if let Some(image) = read_image(field).await? {
                    form.image = Some(image);
                }
            }
            other => tracing::debug!("Ignoring unexpected form part: {}", other),
        }
    }

    Ok(form)
}
