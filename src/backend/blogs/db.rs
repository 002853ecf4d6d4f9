/**
 * Blog Database Operations
 *
 * Every query returns `BlogRow`, the post joined with its author's username.
 * Mutations repeat the `admin_id` predicate, so a row that changed owner or
 * vanished between the ownership check and the write is left untouched and
 * reported as missing.
 */

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

/// Blog post as stored, joined with the author's username
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BlogRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Bare file name inside the upload directory
    pub image: Option<String>,
    pub admin_id: i64,
    /// `None` only if the author row is gone
    pub admin_username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const SELECT_BLOG: &str = r#"
    SELECT b.id, b.title, b.content, b.image, b.admin_id,
           a.username AS admin_username, b.created_at, b.updated_at
    FROM blogs b
    LEFT JOIN admins a ON a.id = b.admin_id
"#;

/// All posts, newest first
pub async fn list_blogs(pool: &PgPool) -> Result<Vec<BlogRow>, sqlx::Error> {
    let query = format!("{SELECT_BLOG} ORDER BY b.created_at DESC, b.id DESC");
    sqlx::query_as::<_, BlogRow>(&query).fetch_all(pool).await
}

/// One post by id
pub async fn get_blog(pool: &PgPool, id: i64) -> Result<Option<BlogRow>, sqlx::Error> {
    let query = format!("{SELECT_BLOG} WHERE b.id = $1");
    sqlx::query_as::<_, BlogRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a post owned by `admin_id`
pub async fn insert_blog(
    pool: &PgPool,
    title: &str,
    content: &str,
    image: &str,
    admin_id: i64,
) -> Result<BlogRow, sqlx::Error> {
    sqlx::query_as::<_, BlogRow>(
        r#"
        WITH inserted AS (
            INSERT INTO blogs (title, content, image, admin_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, image, admin_id, created_at, updated_at
        )
        SELECT i.id, i.title, i.content, i.image, i.admin_id,
               a.username AS admin_username, i.created_at, i.updated_at
        FROM inserted i
        LEFT JOIN admins a ON a.id = i.admin_id
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(image)
    .bind(admin_id)
    .fetch_one(pool)
    .await
}

/// Fields to change; `None` keeps the stored value
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

/// Apply `changes` to post `id` if it is still owned by `admin_id`
///
/// Always refreshes `updated_at`. Returns `None` when no row matched.
pub async fn update_blog(
    pool: &PgPool,
    id: i64,
    admin_id: i64,
    changes: &BlogChanges,
) -> Result<Option<BlogRow>, sqlx::Error> {
    sqlx::query_as::<_, BlogRow>(
        r#"
        WITH updated AS (
            UPDATE blogs
            SET title = COALESCE($1, title),
                content = COALESCE($2, content),
                image = COALESCE($3, image),
                updated_at = NOW()
            WHERE id = $4 AND admin_id = $5
            RETURNING id, title, content, image, admin_id, created_at, updated_at
        )
        SELECT u.id, u.title, u.content, u.image, u.admin_id,
               a.username AS admin_username, u.created_at, u.updated_at
        FROM updated u
        LEFT JOIN admins a ON a.id = u.admin_id
        "#,
    )
    .bind(changes.title.as_deref())
    .bind(changes.content.as_deref())
    .bind(changes.image.as_deref())
    .bind(id)
    .bind(admin_id)
    .fetch_optional(pool)
    .await
}

/// Delete post `id` if owned by `admin_id`
///
/// Returns `None` when no row matched, otherwise the image the row held.
pub async fn delete_blog(
    pool: &PgPool,
    id: i64,
    admin_id: i64,
) -> Result<Option<Option<String>>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<String>>(
        "DELETE FROM blogs WHERE id = $1 AND admin_id = $2 RETURNING image",
    )
    .bind(id)
    .bind(admin_id)
    .fetch_optional(pool)
    .await
}
