//! Story editor: the admin page and the JSON API under `/api/story`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use bichon_core::error::CoreError;
use bichon_core::story::SCENE_ENTITY;
use bichon_db::models::story_scene::{SceneSummary, StoryScene, UpdateStoryScene};
use bichon_db::repositories::StorySceneRepo;
use serde::Serialize;

use crate::auth::session::RequireAuth;
use crate::error::{StoryApiError, StoryApiResult};
use crate::response::Success;
use crate::state::AppState;
use crate::views::{admin, page};

pub const SCENE_UPDATED: &str = "Scene updated successfully";

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct FilesPayload {
    pub files: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScenesPayload {
    pub scenes: Vec<SceneSummary>,
}

#[derive(Debug, Serialize)]
pub struct DetailsPayload {
    pub details: StoryScene,
}

#[derive(Debug, Serialize)]
pub struct MessagePayload {
    pub message: &'static str,
}

fn scene_not_found(scene_id: String) -> StoryApiError {
    StoryApiError::Core(CoreError::NotFound {
        entity: SCENE_ENTITY,
        id: scene_id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /admin/story-editor
pub async fn editor_page(RequireAuth(admin): RequireAuth) -> Html<String> {
    page("Story Editor", Some(&admin), admin::story_editor())
}

/// GET /api/story/files
pub async fn files(
    RequireAuth(_admin): RequireAuth,
    State(state): State<AppState>,
) -> StoryApiResult<Json<Success<FilesPayload>>> {
    let files = StorySceneRepo::list_files(&state.pool).await?;
    Ok(Json(Success::new(FilesPayload { files })))
}

async fn scenes_for(
    state: &AppState,
    file_path: &str,
) -> StoryApiResult<Json<Success<ScenesPayload>>> {
    let scenes = StorySceneRepo::list_for_file(&state.pool, file_path).await?;
    Ok(Json(Success::new(ScenesPayload { scenes })))
}

/// GET /api/story/scenes/{*file_path}
///
/// `file_path` is everything after `/scenes/`, slashes included.
pub async fn scenes(
    RequireAuth(_admin): RequireAuth,
    State(state): State<AppState>,
    Path(file_path): Path<String>,
) -> StoryApiResult<Json<Success<ScenesPayload>>> {
    scenes_for(&state, &file_path).await
}

/// GET /api/story/scenes/
///
/// The wildcard needs at least one character, so the empty path lands here.
pub async fn scenes_without_path(
    RequireAuth(_admin): RequireAuth,
    State(state): State<AppState>,
) -> StoryApiResult<Json<Success<ScenesPayload>>> {
    scenes_for(&state, "").await
}

/// GET /api/story/scene/{scene_id}
pub async fn scene(
    RequireAuth(_admin): RequireAuth,
    State(state): State<AppState>,
    Path(scene_id): Path<String>,
) -> StoryApiResult<Json<Success<DetailsPayload>>> {
    let details = StorySceneRepo::find_by_scene_id(&state.pool, &scene_id)
        .await?
        .ok_or_else(|| scene_not_found(scene_id))?;
    Ok(Json(Success::new(DetailsPayload { details })))
}

/// PUT /api/story/scene/{scene_id}
///
/// Lines in `script` and `actions` are trimmed and blank ones dropped
/// before storage.
pub async fn update_scene(
    RequireAuth(admin): RequireAuth,
    State(state): State<AppState>,
    Path(scene_id): Path<String>,
    body: Result<Json<UpdateStoryScene>, JsonRejection>,
) -> StoryApiResult<Json<Success<MessagePayload>>> {
    let Json(input) = body.map_err(|e| StoryApiError::BadRequest(e.body_text()))?;
    let input = input.normalized();

    if !StorySceneRepo::update(&state.pool, &scene_id, &input).await? {
        return Err(scene_not_found(scene_id));
    }

    tracing::info!(scene_id = %scene_id, username = %admin.username, "Scene updated");
    Ok(Json(Success::new(MessagePayload {
        message: SCENE_UPDATED,
    })))
}
