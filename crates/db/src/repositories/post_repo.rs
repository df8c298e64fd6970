//! Repository for the `posts` table.

use bichon_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::post::{Post, PostSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, created_at";

/// CRUD and counting queries for blog posts.
pub struct PostRepo;

impl PostRepo {
    /// All posts, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a post. `id` and `created_at` are assigned by the database.
    pub async fn create(pool: &PgPool, title: &str, content: &str) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (title, content)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(title)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// Replace a post's title and content. Returns `true` if a row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: &str,
        content: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE posts SET title = $1, content = $2 WHERE id = $3")
            .bind(title)
            .bind(content)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a post. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(pool)
            .await
    }

    /// Count posts created at or after `since`.
    pub async fn count_since(pool: &PgPool, since: Timestamp) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE created_at >= $1")
            .bind(since)
            .fetch_one(pool)
            .await
    }

    /// The `limit` most recently created posts.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<PostSummary>, sqlx::Error> {
        sqlx::query_as::<_, PostSummary>(
            "SELECT id, title, created_at FROM posts
             ORDER BY created_at DESC, id DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
