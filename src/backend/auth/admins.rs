/**
 * Admin Model and Database Operations
 *
 * Admin accounts are created at signup and looked up by email at login.
 * Email uniqueness is enforced by the `admins_email_key` constraint.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Postgres SQLSTATE for `unique_violation`
const UNIQUE_VIOLATION: &str = "23505";

/// Admin row
///
/// Deliberately not `Serialize`: the password hash must never reach a
/// response body.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Admin {
    /// Unique admin ID
    pub id: i64,
    /// Display name shown on blog posts
    pub username: String,
    /// Login email (unique, case-sensitive as stored)
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new admin
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Display name
/// * `email` - Login email
/// * `password_hash` - bcrypt hash
///
/// # Returns
/// Created admin, or the database error (see `is_unique_violation`)
pub async fn create_admin(
    pool: &PgPool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<Admin, sqlx::Error> {
    let admin = sqlx::query_as::<_, Admin>(
        r#"
        INSERT INTO admins (username, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING id, username, email, password_hash, created_at
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(admin)
}

/// Get admin by email
///
/// # Returns
/// Admin or None if not found
pub async fn get_admin_by_email(pool: &PgPool, email: &str) -> Result<Option<Admin>, sqlx::Error> {
    let admin = sqlx::query_as::<_, Admin>(
        r#"
        SELECT id, username, email, password_hash, created_at
        FROM admins
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(admin)
}

/// Whether a database error is a unique-constraint violation
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_error) => db_error.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}
