//! Public blog handlers. No authentication.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use bichon_core::error::CoreError;
use bichon_core::post::{parse_post_id, POST_ENTITY};
use bichon_db::repositories::PostRepo;

use crate::auth::session::CurrentAdmin;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::public::{IndexView, PostView};
use crate::views::{page, status_page, Notice};

/// GET /
///
/// A failed query renders an empty list.
pub async fn index(
    CurrentAdmin(admin): CurrentAdmin,
    State(state): State<AppState>,
) -> Html<String> {
    let posts = PostRepo::list(&state.pool).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Error fetching posts");
        Vec::new()
    });

    page("Home", admin.as_ref(), IndexView { posts }.render())
}

fn post_not_found(raw_id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: POST_ENTITY,
        id: raw_id.to_string(),
    })
}

/// GET /post/{id}
///
/// Non-numeric ids are reported as not found.
pub async fn show(
    CurrentAdmin(admin): CurrentAdmin,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let id = parse_post_id(&raw_id).ok_or_else(|| post_not_found(&raw_id))?;

    match PostRepo::find_by_id(&state.pool, id).await {
        Ok(Some(post)) => {
            let title = post.title.clone();
            Ok(page(&title, admin.as_ref(), PostView { post }.render()).into_response())
        }
        Ok(None) => Err(post_not_found(&raw_id)),
        Err(e) => {
            tracing::error!(post_id = id, error = %e, "Error fetching post");
            Ok(status_page(Notice::PostLoadFailed, admin.as_ref()))
        }
    }
}

/// Router fallback for unmatched paths.
pub async fn not_found(CurrentAdmin(admin): CurrentAdmin) -> Response {
    status_page(Notice::NotFound, admin.as_ref())
}
