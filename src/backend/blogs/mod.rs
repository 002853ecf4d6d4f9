//! Blogs Module
//!
//! Blog posts, their images, and the HTTP handlers that manage them.
//!
//! # Module Structure
//!
//! ```text
//! blogs/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - Post queries (joined with author username)
//! ├── uploads.rs   - Image file storage
//! └── handlers/    - HTTP handlers (list, get, create, update, delete)
//! ```
//!
//! # Consistency
//!
//! Files and rows are not written atomically together. Create stores the
//! file before inserting and removes it if the insert fails; update and
//! delete only remove old files after the row change has succeeded.

pub mod db;
pub mod uploads;
pub mod handlers;

pub use uploads::UploadStore;
