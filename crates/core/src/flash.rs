//! Post-action feedback messages shown on the admin posts list.
//!
//! Redirects after a post action carry the message in the query string
//! (`/admin/posts?message=...&type=error`). The list page only renders text
//! that parses back into a known [`Flash`], so a crafted URL cannot put
//! arbitrary text on the page.

/// Styling bucket for a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Every message the posts list can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    PostCreated,
    PostUpdated,
    PostDeleted,
    PostNotFound,
    PostLoadFailed,
    PostDeleteFailed,
}

const ALL: [Flash; 6] = [
    Flash::PostCreated,
    Flash::PostUpdated,
    Flash::PostDeleted,
    Flash::PostNotFound,
    Flash::PostLoadFailed,
    Flash::PostDeleteFailed,
];

impl Flash {
    pub const fn message(self) -> &'static str {
        match self {
            Self::PostCreated => "Post created successfully",
            Self::PostUpdated => "Post updated successfully",
            Self::PostDeleted => "Post deleted successfully",
            Self::PostNotFound => "Post not found",
            Self::PostLoadFailed => "Error loading post",
            Self::PostDeleteFailed => "Failed to delete post",
        }
    }

    pub const fn kind(self) -> FlashKind {
        match self {
            Self::PostCreated | Self::PostUpdated | Self::PostDeleted => FlashKind::Success,
            Self::PostNotFound | Self::PostLoadFailed | Self::PostDeleteFailed => FlashKind::Error,
        }
    }

    /// Look up the flash whose message text is exactly `message`.
    pub fn parse(message: &str) -> Option<Self> {
        ALL.into_iter().find(|flash| flash.message() == message)
    }

    /// Redirect target for the posts list carrying this flash.
    ///
    /// Success messages omit `type`, matching the list's default.
    pub fn redirect_path(self) -> String {
        posts_list_path(self.message(), self.kind())
    }
}

fn posts_list_path(message: &str, kind: FlashKind) -> String {
    let message = urlencoding::encode(message);
    match kind {
        FlashKind::Success => format!("/admin/posts?message={message}"),
        FlashKind::Error => format!("/admin/posts?message={message}&type=error"),
    }
}
