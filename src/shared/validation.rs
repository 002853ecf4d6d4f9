/**
 * Input Validation
 *
 * Shape and length rules for admin accounts, blog posts and uploaded images.
 * Every rule returns a `SharedError` naming the offending field; handlers
 * run these before touching the database or the upload directory.
 *
 * # Rules
 *
 * - Username: at least 3 characters (ignoring surrounding whitespace)
 * - Email: one `@`, non-empty local part, dotted domain, no whitespace
 * - Password: at least 6 characters
 * - Blog title: at least 3 characters; blog content: at least 10 characters
 * - Image: extension in `.jpg .jpeg .png .gif` (case-insensitive)
 */

use std::path::Path;

use crate::shared::error::SharedError;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_TITLE_LEN: usize = 3;
pub const MIN_CONTENT_LEN: usize = 10;

/// Image extensions accepted for blog uploads, without the leading dot
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

pub fn validate_username(username: &str) -> Result<(), SharedError> {
    if char_len(username) < MIN_USERNAME_LEN {
        return Err(SharedError::validation(
            "username",
            format!("Username must be at least {} characters", MIN_USERNAME_LEN),
        ));
    }
    Ok(())
}

/// Basic structural email check
///
/// This is not RFC 5322; it rejects the obviously malformed inputs the
/// signup form can produce and leaves deliverability to the operator.
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    let invalid = || SharedError::validation("email", "Invalid email format");

    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), SharedError> {
    if char_len(title) < MIN_TITLE_LEN {
        return Err(SharedError::validation(
            "title",
            format!("Title must be at least {} characters", MIN_TITLE_LEN),
        ));
    }
    Ok(())
}

pub fn validate_content(content: &str) -> Result<(), SharedError> {
    if char_len(content) < MIN_CONTENT_LEN {
        return Err(SharedError::validation(
            "content",
            format!("Content must be at least {} characters", MIN_CONTENT_LEN),
        ));
    }
    Ok(())
}

/// Extract and check the extension of an uploaded file name
///
/// # Returns
///
/// The lower-cased extension without the dot (e.g. `"png"`), which is what
/// the generated file name will carry.
pub fn image_extension(file_name: &str) -> Result<String, SharedError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(SharedError::upload(format!(
            "Invalid file format. Allowed: {}",
            ALLOWED_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect::<Vec<_>>()
                .join(",")
        )))
    }
}

/// Parse a blog id path segment
///
/// Ids are positive integers; anything else is a validation error rather
/// than a not-found.
pub fn parse_blog_id(raw: &str) -> Result<i64, SharedError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(SharedError::validation("id", "Invalid ID format")),
    }
}
