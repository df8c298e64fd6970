//! HTML views rendered with maud.
//!
//! Each page is a small view-model struct with a `render` method producing
//! the page body; [`page`] wraps it in the shared layout. All interpolated
//! text is escaped by maud.

pub mod admin;
pub mod public;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use bichon_core::types::Timestamp;
use maud::{html, Markup, DOCTYPE};

use crate::auth::session::AdminUser;

pub const SITE_NAME: &str = "Bichon";

/// Wrap `body` in the site layout.
///
/// Navigation shows admin links when `admin` is signed in.
pub fn layout(title: &str, admin: Option<&AdminUser>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_NAME) }
                link rel="stylesheet" href="/css/style.css";
            }
            body {
                header.site-header {
                    a.brand href="/" { (SITE_NAME) }
                    nav {
                        a href="/" { "Home" }
                        @if let Some(admin) = admin {
                            a href="/admin" { "Dashboard" }
                            a href="/admin/posts" { "Posts" }
                            a href="/admin/story-editor" { "Story Editor" }
                            span.nav-user { (admin.username) }
                            a href="/admin/logout" { "Logout" }
                        }
                    }
                }
                main.container { (body) }
            }
        }
    }
}

/// Render a full page with status 200.
pub fn page(title: &str, admin: Option<&AdminUser>, body: Markup) -> Html<String> {
    Html(layout(title, admin, body).into_string())
}

/// Human-readable date used in post listings.
pub fn format_date(at: &Timestamp) -> String {
    at.format("%B %-d, %Y").to_string()
}

// ---------------------------------------------------------------------------
// Status pages
// ---------------------------------------------------------------------------

/// Fixed pages shown in place of content when a request cannot be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NotFound,
    PostNotFound,
    ServerError,
    PostLoadFailed,
}

impl Notice {
    pub const fn status(self) -> StatusCode {
        match self {
            Self::NotFound | Self::PostNotFound => StatusCode::NOT_FOUND,
            Self::ServerError | Self::PostLoadFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::NotFound => "404 - Page Not Found",
            Self::PostNotFound => "404 - Post Not Found",
            Self::ServerError | Self::PostLoadFailed => "Error",
        }
    }

    const fn heading(self) -> &'static str {
        match self {
            Self::NotFound | Self::PostNotFound => "404",
            Self::ServerError | Self::PostLoadFailed => "Error",
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::NotFound => "Page not found.",
            Self::PostNotFound => "Post not found.",
            Self::ServerError => "Something went wrong.",
            Self::PostLoadFailed => "Could not load post.",
        }
    }
}

/// Render `notice` as a full page with its status code.
pub fn status_page(notice: Notice, admin: Option<&AdminUser>) -> Response {
    let body = html! {
        div.box {
            h1 { (notice.heading()) }
            p { (notice.message()) }
            a href="/" { "Go back home" }
        }
    };
    (notice.status(), page(notice.title(), admin, body)).into_response()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn layout_escapes_title() {
        let markup = layout("<b>", None, html! {}).into_string();
        assert!(markup.contains("&lt;b&gt;"));
        assert!(!markup.contains("<b>"));
    }

    #[test]
    fn admin_nav_only_when_signed_in() {
        let anonymous = layout("Home", None, html! {}).into_string();
        assert!(!anonymous.contains("/admin/logout"));

        let admin = AdminUser {
            id: 1,
            username: "root".into(),
        };
        let signed_in = layout("Home", Some(&admin), html! {}).into_string();
        assert!(signed_in.contains("/admin/logout"));
        assert!(signed_in.contains("root"));
    }

    #[test]
    fn notices_carry_matching_status() {
        assert_eq!(Notice::PostNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            Notice::PostLoadFailed.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn dates_are_long_form() {
        let at = Utc.with_ymd_and_hms(2026, 3, 5, 10, 0, 0).unwrap();
        assert_eq!(format_date(&at), "March 5, 2026");
    }
}
