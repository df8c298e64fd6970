//! HTTP-level tests for the `/api/story` JSON endpoints.

mod common;

use axum::http::StatusCode;
use bichon_db::models::story_scene::CreateStoryScene;
use bichon_db::repositories::StorySceneRepo;
use common::{body_json, get, put_json, put_raw, signed_in_app};
use serde_json::json;
use sqlx::PgPool;

async fn seed_scene(pool: &PgPool, scene_id: &str, file_path: &str, location: &str) {
    StorySceneRepo::upsert(
        pool,
        &CreateStoryScene {
            scene_id: scene_id.to_string(),
            file_path: file_path.to_string(),
            location: location.to_string(),
            script: vec!["Hello.".into(), "Goodbye.".into()],
            actions: vec!["wave".into()],
        },
    )
    .await
    .expect("scene seed should succeed");
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_files_are_distinct_and_sorted(pool: PgPool) {
    seed_scene(&pool, "b1", "story/b.txt", "").await;
    seed_scene(&pool, "a1", "story/a.txt", "").await;
    seed_scene(&pool, "a2", "story/a.txt", "").await;
    let (app, cookie) = signed_in_app(pool).await;

    let response = get(&app, "/api/story/files", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!({ "success": true, "files": ["story/a.txt", "story/b.txt"] }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_scenes_for_nested_file_path(pool: PgPool) {
    seed_scene(&pool, "s2", "chapter1/intro.txt", "Garden").await;
    seed_scene(&pool, "s1", "chapter1/intro.txt", "Hall").await;
    seed_scene(&pool, "x1", "chapter2/other.txt", "Cellar").await;
    let (app, cookie) = signed_in_app(pool).await;

    let response = get(&app, "/api/story/scenes/chapter1/intro.txt", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(
        json["scenes"],
        json!([
            { "scene_id": "s1", "location": "Hall" },
            { "scene_id": "s2", "location": "Garden" },
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_scenes_for_unknown_file_is_empty(pool: PgPool) {
    let (app, cookie) = signed_in_app(pool).await;

    let json = body_json(get(&app, "/api/story/scenes/missing.txt", Some(&cookie)).await).await;
    assert_eq!(json, json!({ "success": true, "scenes": [] }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_file_path_answers_with_json(pool: PgPool) {
    seed_scene(&pool, "s1", "a.txt", "Hall").await;
    let (app, cookie) = signed_in_app(pool).await;

    let response = get(&app, "/api/story/scenes/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "success": true, "scenes": [] }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_scene_detail_returns_full_row(pool: PgPool) {
    seed_scene(&pool, "s1", "chapter1/intro.txt", "Hall").await;
    let (app, cookie) = signed_in_app(pool).await;

    let response = get(&app, "/api/story/scene/s1", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let details = &json["details"];
    assert_eq!(details["scene_id"], "s1");
    assert_eq!(details["file_path"], "chapter1/intro.txt");
    assert_eq!(details["location"], "Hall");
    assert_eq!(details["script"], json!(["Hello.", "Goodbye."]));
    assert_eq!(details["actions"], json!(["wave"]));
    assert!(details["updated_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_scene_is_json_404(pool: PgPool) {
    let (app, cookie) = signed_in_app(pool).await;

    let response = get(&app, "/api/story/scene/nope", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "error": "Scene not found" })
    );
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_scene_with_empty_arrays(pool: PgPool) {
    seed_scene(&pool, "s1", "chapter1/intro.txt", "Hall").await;
    let (app, cookie) = signed_in_app(pool).await;

    let response = put_json(
        &app,
        "/api/story/scene/s1",
        json!({ "script": [], "actions": [], "location": "Room" }),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "success": true, "message": "Scene updated successfully" })
    );

    let json = body_json(get(&app, "/api/story/scene/s1", Some(&cookie)).await).await;
    assert_eq!(json["details"]["location"], "Room");
    assert_eq!(json["details"]["script"], json!([]));
    assert_eq!(json["details"]["actions"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_scene_trims_and_drops_blank_lines(pool: PgPool) {
    seed_scene(&pool, "s1", "chapter1/intro.txt", "Hall").await;
    let (app, cookie) = signed_in_app(pool.clone()).await;

    let response = put_json(
        &app,
        "/api/story/scene/s1",
        json!({ "script": ["  a  ", "", "b"], "actions": ["\t", " run "], "location": "Hall" }),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let scene = StorySceneRepo::find_by_scene_id(&pool, "s1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(scene.script.0, vec!["a", "b"]);
    assert_eq!(scene.actions.0, vec!["run"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_refreshes_updated_at(pool: PgPool) {
    seed_scene(&pool, "s1", "chapter1/intro.txt", "Hall").await;
    sqlx::query("UPDATE story_scenes SET updated_at = NOW() - INTERVAL '1 day'")
        .execute(&pool)
        .await
        .unwrap();
    let before = StorySceneRepo::find_by_scene_id(&pool, "s1")
        .await
        .unwrap()
        .unwrap()
        .updated_at;
    let (app, cookie) = signed_in_app(pool.clone()).await;

    put_json(
        &app,
        "/api/story/scene/s1",
        json!({ "script": ["x"], "actions": [], "location": "Hall" }),
        Some(&cookie),
    )
    .await;

    let after = StorySceneRepo::find_by_scene_id(&pool, "s1")
        .await
        .unwrap()
        .unwrap()
        .updated_at;
    assert!(after > before);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_unknown_scene_is_json_404(pool: PgPool) {
    let (app, cookie) = signed_in_app(pool).await;

    let response = put_json(
        &app,
        "/api/story/scene/ghost",
        json!({ "script": ["a"], "actions": [], "location": "Nowhere" }),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "error": "Scene not found" })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_body_is_json_400(pool: PgPool) {
    seed_scene(&pool, "s1", "chapter1/intro.txt", "Hall").await;
    let (app, cookie) = signed_in_app(pool).await;

    let response = put_raw(&app, "/api/story/scene/s1", "{not json".into(), Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
}
