/**
 * Blog Handler Types
 *
 * Wire representation of blog posts and the delete confirmation.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::blogs::db::BlogRow;
use crate::backend::blogs::uploads::public_image_path;

/// Blog post as returned to clients
///
/// `image` is the public path (`/uploads/<file>`), not the stored name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlogResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub admin_id: i64,
    pub admin_username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogRow> for BlogResponse {
    fn from(row: BlogRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            image: row.image.as_deref().map(public_image_path),
            admin_id: row.admin_id,
            admin_username: row.admin_username,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Delete confirmation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeleteResponse {
    pub message: String,
    /// Set when the row was deleted but its image file could not be removed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_cleanup_error: Option<String>,
}
