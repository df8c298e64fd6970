//! Repository for the `story_scenes` table.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::story_scene::{CreateStoryScene, SceneSummary, StoryScene, UpdateStoryScene};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "scene_id, file_path, location, script, actions, updated_at";

/// Queries backing the story editor.
pub struct StorySceneRepo;

impl StorySceneRepo {
    /// Distinct story file paths in lexicographic order.
    pub async fn list_files(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT file_path FROM story_scenes ORDER BY file_path")
            .fetch_all(pool)
            .await
    }

    /// Scenes belonging to `file_path`, ordered by `scene_id`.
    pub async fn list_for_file(
        pool: &PgPool,
        file_path: &str,
    ) -> Result<Vec<SceneSummary>, sqlx::Error> {
        sqlx::query_as::<_, SceneSummary>(
            "SELECT scene_id, location FROM story_scenes
             WHERE file_path = $1
             ORDER BY scene_id",
        )
        .bind(file_path)
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_scene_id(
        pool: &PgPool,
        scene_id: &str,
    ) -> Result<Option<StoryScene>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM story_scenes WHERE scene_id = $1");
        sqlx::query_as::<_, StoryScene>(&query)
            .bind(scene_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a scene's script, actions and location and refresh
    /// `updated_at`. Returns `true` if a row matched.
    ///
    /// Lines are stored exactly as given; callers normalize first.
    pub async fn update(
        pool: &PgPool,
        scene_id: &str,
        input: &UpdateStoryScene,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE story_scenes
             SET script = $1, actions = $2, location = $3, updated_at = NOW()
             WHERE scene_id = $4",
        )
        .bind(Json(&input.script))
        .bind(Json(&input.actions))
        .bind(&input.location)
        .bind(scene_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert a scene, replacing any existing row with the same `scene_id`.
    pub async fn upsert(
        pool: &PgPool,
        input: &CreateStoryScene,
    ) -> Result<StoryScene, sqlx::Error> {
        let query = format!(
            "INSERT INTO story_scenes (scene_id, file_path, location, script, actions)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (scene_id) DO UPDATE SET
                file_path = EXCLUDED.file_path,
                location = EXCLUDED.location,
                script = EXCLUDED.script,
                actions = EXCLUDED.actions,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoryScene>(&query)
            .bind(&input.scene_id)
            .bind(&input.file_path)
            .bind(&input.location)
            .bind(Json(&input.script))
            .bind(Json(&input.actions))
            .fetch_one(pool)
            .await
    }
}
