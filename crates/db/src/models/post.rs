//! Blog post model.

use bichon_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// Listing projection used by the dashboard's recent-posts panel.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostSummary {
    pub id: DbId,
    pub title: String,
    pub created_at: Timestamp,
}
