//! Story scene model and DTOs.

use bichon_core::story::normalize_lines;
use bichon_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `story_scenes` table.
///
/// `script` and `actions` are JSONB arrays of lines.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoryScene {
    pub scene_id: String,
    pub file_path: String,
    pub location: String,
    pub script: Json<Vec<String>>,
    pub actions: Json<Vec<String>>,
    pub updated_at: Timestamp,
}

/// Scene list entry for a single story file.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SceneSummary {
    pub scene_id: String,
    pub location: String,
}

/// Body of `PUT /api/story/scene/{scene_id}`.
///
/// Missing arrays are treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStoryScene {
    #[serde(default)]
    pub script: Vec<String>,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub location: String,
}

impl UpdateStoryScene {
    /// Trim every line and drop blank ones in `script` and `actions`.
    pub fn normalized(self) -> Self {
        Self {
            script: normalize_lines(self.script),
            actions: normalize_lines(self.actions),
            location: self.location,
        }
    }
}

/// DTO for inserting or replacing a scene (seeding and tests).
#[derive(Debug, Clone)]
pub struct CreateStoryScene {
    pub scene_id: String,
    pub file_path: String,
    pub location: String,
    pub script: Vec<String>,
    pub actions: Vec<String>,
}
