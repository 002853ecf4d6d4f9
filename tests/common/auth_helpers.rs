//! Authentication test helpers
//!
//! Provides utilities for creating test admins, generating tokens,
//! and building Authorization headers.

use sqlx::PgPool;
use uuid::Uuid;

use starlink_blog::backend::auth::admins::create_admin;
use starlink_blog::backend::auth::password::hash_password;
use starlink_blog::backend::auth::sessions::SessionKeys;

/// Secret every test app signs tokens with
pub const TEST_JWT_SECRET: &[u8] = b"integration-test-secret";

/// Test admin credentials
pub struct TestAdmin {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test admin in the database and issue a token for it
pub async fn create_test_admin(pool: &PgPool, sessions: &SessionKeys) -> TestAdmin {
    let suffix = Uuid::new_v4().simple().to_string();
    let email = format!("admin_{suffix}@example.com");
    let username = format!("admin_{}", &suffix[..8]);
    let password = "test_password_123".to_string();

    let password_hash = hash_password(&password)
        .await
        .expect("Failed to hash test password");
    let admin = create_admin(pool, &username, &email, &password_hash)
        .await
        .expect("Failed to create test admin");

    let token = sessions
        .issue(admin.id as u64)
        .expect("Failed to create test token");

    TestAdmin {
        id: admin.id,
        username,
        email,
        password,
        token,
    }
}

/// A unique, well-formed email that is not registered
pub fn unique_email() -> String {
    format!("new_{}@example.com", Uuid::new_v4().simple())
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
