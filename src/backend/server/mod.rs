//! Server Module
//!
//! Server configuration, state, initialization and the health endpoints.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs      - Module exports and documentation
//! ├── config.rs   - Environment configuration and database pool
//! ├── state.rs    - AppState and FromRef impls
//! ├── init.rs     - create_app
//! └── health.rs   - GET /health and GET /
//! ```

pub mod config;
pub mod state;
pub mod init;
pub mod health;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
