//! Route definitions for the story API.

use axum::routing::get;
use axum::Router;

use crate::handlers::story;
use crate::state::AppState;

/// Routes mounted at `/api/story`.
///
/// ```text
/// GET /files                -> files
/// GET /scenes/             -> scenes_without_path
/// GET /scenes/{*file_path}  -> scenes
/// GET /scene/{scene_id}     -> scene
/// PUT /scene/{scene_id}     -> update_scene
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/files", get(story::files))
        .route("/scenes/", get(story::scenes_without_path))
        .route("/scenes/{*file_path}", get(story::scenes))
        .route("/scene/{scene_id}", get(story::scene).put(story::update_scene))
}
