//! Blog Handlers Module
//!
//! # Handlers
//!
//! - **`list_blogs`** - GET /blogs
//! - **`get_blog`** - GET /blogs/{id}
//! - **`create_blog`** - POST /admin/blogs
//! - **`update_blog`** - PUT /admin/blogs/{id}
//! - **`delete_blog`** - DELETE /admin/blogs/{id}
//!
//! The three `/admin` handlers expect `require_admin` in front of them and
//! read the caller through the `AuthAdmin` extractor.

pub mod types;

/// Multipart form reading shared by create and update
pub mod form;

pub mod read;
pub mod create;
pub mod update;
pub mod delete;

pub use create::create_blog;
pub use delete::delete_blog;
pub use read::{get_blog, list_blogs};
pub use types::{BlogResponse, DeleteResponse};
pub use update::update_blog;
