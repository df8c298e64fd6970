//! Handlers for admin post management under `/admin/posts`.
//!
//! Outcomes are reported by redirecting to the posts list with a
//! [`Flash`] in the query string. Validation and write failures on the
//! form re-render it with the submitted values instead.

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use bichon_core::flash::Flash;
use bichon_core::post::{parse_post_id, PostInput, POST_FIELDS_REQUIRED};
use bichon_core::types::DbId;
use bichon_db::repositories::PostRepo;
use serde::Deserialize;

use crate::auth::session::{AdminUser, RequireAuth};
use crate::state::AppState;
use crate::views::admin::{PostFormView, PostsListView};
use crate::views::page;

pub const CREATE_FAILED: &str = "Failed to create post";
pub const UPDATE_FAILED: &str = "Failed to update post";

/// Query string of `GET /admin/posts`.
///
/// Only `message` is read. The styling comes from the matching [`Flash`],
/// so `type` is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub message: Option<String>,
}

fn flash_redirect(flash: Flash) -> Response {
    Redirect::to(&flash.redirect_path()).into_response()
}

fn form_page(admin: &AdminUser, view: PostFormView) -> Html<String> {
    page(view.page_title(), Some(admin), view.render())
}

fn rejected_form(
    admin: &AdminUser,
    post_id: Option<DbId>,
    input: PostInput,
    error: &str,
) -> Response {
    let view = PostFormView {
        post_id,
        title: input.title,
        content: input.content,
        error: Some(error.to_string()),
    };
    form_page(admin, view).into_response()
}

/// GET /admin/posts
pub async fn list(
    RequireAuth(admin): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> Html<String> {
    let view = match PostRepo::list(&state.pool).await {
        Ok(posts) => PostsListView {
            posts,
            flash: query.message.as_deref().and_then(Flash::parse),
        },
        Err(e) => {
            tracing::error!(error = %e, "Error fetching posts");
            PostsListView::default()
        }
    };

    page("Posts", Some(&admin), view.render())
}

/// GET /admin/posts/new
pub async fn new_form(RequireAuth(admin): RequireAuth) -> Html<String> {
    form_page(&admin, PostFormView::new_post())
}

/// POST /admin/posts/new
pub async fn create(
    RequireAuth(admin): RequireAuth,
    State(state): State<AppState>,
    Form(input): Form<PostInput>,
) -> Response {
    if input.check().is_err() {
        return rejected_form(&admin, None, input, POST_FIELDS_REQUIRED);
    }

    match PostRepo::create(&state.pool, &input.title, &input.content).await {
        Ok(post) => {
            tracing::info!(post_id = post.id, "Post created");
            flash_redirect(Flash::PostCreated)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error creating post");
            rejected_form(&admin, None, input, CREATE_FAILED)
        }
    }
}

/// GET /admin/posts/edit/{id}
pub async fn edit_form(
    RequireAuth(admin): RequireAuth,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_post_id(&raw_id) else {
        return flash_redirect(Flash::PostNotFound);
    };

    match PostRepo::find_by_id(&state.pool, id).await {
        Ok(Some(post)) => form_page(&admin, PostFormView::edit(post)).into_response(),
        Ok(None) => flash_redirect(Flash::PostNotFound),
        Err(e) => {
            tracing::error!(post_id = id, error = %e, "Error fetching post");
            flash_redirect(Flash::PostLoadFailed)
        }
    }
}

/// POST /admin/posts/edit/{id}
pub async fn update(
    RequireAuth(admin): RequireAuth,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(input): Form<PostInput>,
) -> Response {
    let Some(id) = parse_post_id(&raw_id) else {
        return flash_redirect(Flash::PostNotFound);
    };

    if input.check().is_err() {
        return rejected_form(&admin, Some(id), input, POST_FIELDS_REQUIRED);
    }

    match PostRepo::update(&state.pool, id, &input.title, &input.content).await {
        Ok(true) => {
            tracing::info!(post_id = id, "Post updated");
            flash_redirect(Flash::PostUpdated)
        }
        Ok(false) => flash_redirect(Flash::PostNotFound),
        Err(e) => {
            tracing::error!(post_id = id, error = %e, "Error updating post");
            rejected_form(&admin, Some(id), input, UPDATE_FAILED)
        }
    }
}

/// POST /admin/posts/delete/{id}
pub async fn delete(
    RequireAuth(_admin): RequireAuth,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_post_id(&raw_id) else {
        return flash_redirect(Flash::PostNotFound);
    };

    match PostRepo::delete(&state.pool, id).await {
        Ok(true) => {
            tracing::info!(post_id = id, "Post deleted");
            flash_redirect(Flash::PostDeleted)
        }
        Ok(false) => flash_redirect(Flash::PostNotFound),
        Err(e) => {
            tracing::error!(post_id = id, error = %e, "Error deleting post");
            flash_redirect(Flash::PostDeleteFailed)
        }
    }
}
