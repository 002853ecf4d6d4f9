/**
 * Server Configuration
 *
 * This module loads and validates process configuration and opens the
 * PostgreSQL connection pool.
 *
 * # Configuration Sources
 *
 * `.env` (if present, via `dotenv` in `main`) and then the process
 * environment. Every value below except `UPLOAD_DIR` is required; a missing
 * or empty one aborts startup.
 *
 * | Variable          | Meaning                                   |
 * |-------------------|-------------------------------------------|
 * | `DB_HOST`         | PostgreSQL host                           |
 * | `DB_PORT`         | PostgreSQL port                           |
 * | `DB_USER`         | PostgreSQL user                           |
 * | `DB_PASSWORD`     | PostgreSQL password                       |
 * | `DB_NAME`         | Database name                             |
 * | `DB_SSLMODE`      | `disable`, `prefer`, `require`, ...       |
 * | `JWT_SECRET`      | HMAC key for session tokens               |
 * | `ALLOWED_ORIGINS` | Comma-separated CORS origins or `*`       |
 * | `ALLOWED_METHODS` | Comma-separated CORS methods or `*`       |
 * | `ALLOWED_HEADERS` | Comma-separated CORS headers or `*`       |
 * | `PORT`            | Listen port                               |
 * | `UPLOAD_DIR`      | Image directory (default `./uploads`)     |
 */

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use thiserror::Error;

use crate::backend::error::StartupError;

const DEFAULT_UPLOAD_DIR: &str = "./uploads";

const MAX_CONNECTIONS: u32 = 25;
const CONNECTION_MAX_LIFETIME: Duration = Duration::from_secs(5 * 60);
const CONNECTION_IDLE_TIMEOUT: Duration = Duration::from_secs(2 * 60);
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const STARTUP_PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingValue(&'static str),
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: &'static str, message: String },
}

/// PostgreSQL connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: PgSslMode,
}

impl DatabaseConfig {
    /// Connection options for the pool
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode)
    }

    /// Connection description safe for logs (password masked)
    pub fn describe(&self) -> String {
        format!(
            "postgres://{}:****@{}:{}/{}?sslmode={:?}",
            self.user, self.host, self.port, self.name, self.ssl_mode
        )
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Cross-origin policy lists
///
/// Each list holds trimmed entries; a list containing `*` means "any".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

impl CorsConfig {
    /// Allow any origin, method and header (used by tests and local setups)
    pub fn permissive() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["*".to_string()],
            allowed_headers: vec!["*".to_string()],
        }
    }
}

/// Complete server configuration, read once at startup
#[derive(Clone)]
pub struct ServerConfig {
    pub database: DatabaseConfig,
    pub jwt_secret: String,
    pub cors: CorsConfig,
    pub port: u16,
    pub upload_dir: PathBuf,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database", &self.database)
            .field("jwt_secret", &"****")
            .field("cors", &self.cors)
            .field("port", &self.port)
            .field("upload_dir", &self.upload_dir)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// `from_env` delegates here; tests pass a map instead of mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingValue(key))
        };

        let database = DatabaseConfig {
            host: required("DB_HOST")?,
            port: parse_port("DB_PORT", &required("DB_PORT")?)?,
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            name: required("DB_NAME")?,
            ssl_mode: parse_ssl_mode(&required("DB_SSLMODE")?)?,
        };

        let jwt_secret = required("JWT_SECRET")?;

        let cors = CorsConfig {
            allowed_origins: split_list(&required("ALLOWED_ORIGINS")?)
                .into_iter()
                .map(|origin| origin.trim_end_matches('/').to_string())
                .collect(),
            allowed_methods: split_list(&required("ALLOWED_METHODS")?),
            allowed_headers: split_list(&required("ALLOWED_HEADERS")?),
        };

        let port = parse_port("PORT", &required("PORT")?)?;

        let upload_dir = lookup("UPLOAD_DIR")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string())
            .into();

        Ok(Self {
            database,
            jwt_secret,
            cors,
            port,
            upload_dir,
        })
    }
}

fn parse_port(var: &'static str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
        var,
        message: e.to_string(),
    })
}

fn parse_ssl_mode(value: &str) -> Result<PgSslMode, ConfigError> {
    PgSslMode::from_str(value).map_err(|e| ConfigError::InvalidValue {
        var: "DB_SSLMODE",
        message: e.to_string(),
    })
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Open the connection pool, verify it answers, and run migrations
///
/// # Errors
///
/// Any failure here is fatal to startup: unreachable database, a ping that
/// does not answer within five seconds, or a failed migration.
pub async fn load_database(config: &DatabaseConfig) -> Result<PgPool, StartupError> {
    tracing::info!("Connecting to database at {}", config.describe());

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .max_lifetime(CONNECTION_MAX_LIFETIME)
        .idle_timeout(CONNECTION_IDLE_TIMEOUT)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(config.connect_options())
        .await
        .map_err(|e| {
            tracing::error!("Connection failed. URL: {}", config.describe());
            e
        })?;

    tokio::time::timeout(STARTUP_PING_TIMEOUT, sqlx::query("SELECT 1").execute(&pool))
        .await
        .map_err(|_| StartupError::DatabaseTimeout(STARTUP_PING_TIMEOUT))??;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
