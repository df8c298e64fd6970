//! Route definitions for the admin panel.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, dashboard, posts, story};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// Every handler except login and logout takes
/// [`RequireAuth`](crate::auth::session::RequireAuth). The posts list also
/// answers with a trailing slash; `/admin/` is registered in
/// [`app_routes`](super::app_routes) because a nested `/` only matches the
/// bare prefix.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/login", get(auth::login_page).post(auth::login_submit))
        .route("/logout", get(auth::logout))
        .route("/posts", get(posts::list))
        .route("/posts/", get(posts::list))
        .route("/posts/new", get(posts::new_form).post(posts::create))
        .route("/posts/edit/{id}", get(posts::edit_form).post(posts::update))
        .route("/posts/delete/{id}", post(posts::delete))
        .route("/story-editor", get(story::editor_page))
}
