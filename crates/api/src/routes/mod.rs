pub mod admin;
pub mod health;
pub mod public;
pub mod story;

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Build the application route tree (without middleware).
///
/// ```text
/// GET  /                              public post list
/// GET  /post/{id}                     public post
///
/// GET  /admin/login                   login form (signed-out only)
/// POST /admin/login                   login submit (signed-out only)
/// GET  /admin/logout                  destroy session
/// GET  /admin, /admin/                dashboard
/// GET  /admin/posts, /admin/posts/    post list, flash via ?message=
/// GET  /admin/posts/new               new post form
/// POST /admin/posts/new               create post
/// GET  /admin/posts/edit/{id}         edit post form
/// POST /admin/posts/edit/{id}         update post
/// POST /admin/posts/delete/{id}       delete post
/// GET  /admin/story-editor            story editor page
///
/// GET  /api/story/files               distinct story files
/// GET  /api/story/scenes/{*file_path} scenes of one file
/// GET  /api/story/scenes/             scenes with an empty file path
/// GET  /api/story/scene/{scene_id}    scene detail
/// PUT  /api/story/scene/{scene_id}    scene update
///
/// GET  /health                        service and database health
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(public::router())
        .route("/admin/", get(dashboard::dashboard))
        .nest("/admin", admin::router())
        .nest("/api/story", story::router())
}
