//! Blog post form input and its validation rules.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// Entity label used in not-found errors for posts.
pub const POST_ENTITY: &str = "Post";

/// Message shown inline on the post form when either field is missing.
pub const POST_FIELDS_REQUIRED: &str = "Title and content are required";

/// Number of posts shown in the dashboard's "recent posts" panel.
pub const DASHBOARD_RECENT_LIMIT: i64 = 5;

/// Submitted title/content pair for creating or editing a post.
///
/// Missing form fields deserialize to empty strings so that an absent field
/// and an empty one are rejected the same way.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PostInput {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub content: String,
}

impl PostInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Reject input where either field is empty.
    ///
    /// Field-level details are collapsed into [`POST_FIELDS_REQUIRED`]; the
    /// form only ever shows that one message.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|_| CoreError::Validation(POST_FIELDS_REQUIRED.to_string()))
    }
}

/// Parse a post id taken from a URL segment.
///
/// Returns `None` for anything that is not a positive integer; callers treat
/// that the same as an id with no matching row.
pub fn parse_post_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}
