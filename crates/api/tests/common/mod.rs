#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use bichon_api::auth::password::hash_password;
use bichon_api::config::{ServerConfig, SessionConfig};
use bichon_api::router::build_app_router;
use bichon_api::state::AppState;
use bichon_db::models::admin::{Admin, CreateAdmin};
use bichon_db::repositories::AdminRepo;
use bichon_db::DatabaseSettings;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_sessions::MemoryStore;

pub const TEST_USERNAME: &str = "editor";
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
///
/// Static files come from the workspace `public/` directory and cookies use
/// the development policy.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../public"),
        database: DatabaseSettings::default(),
        session: SessionConfig {
            secret: "test-session-secret".to_string(),
            production: false,
        },
    }
}

/// Build the full application router over `pool` with an in-memory session
/// store.
///
/// Clones of the returned router share the store, so a cookie obtained from
/// one request is honoured by the next.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Like [`build_test_app`] but with a caller-supplied configuration.
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config),
    };
    build_app_router(state, MemoryStore::default())
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

fn with_cookie(
    builder: axum::http::request::Builder,
    cookie: Option<&str>,
) -> axum::http::request::Builder {
    match cookie {
        Some(cookie) => builder.header(header::COOKIE, cookie),
        None => builder,
    }
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let request = with_cookie(Request::builder().method("GET").uri(uri), cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST an `application/x-www-form-urlencoded` body built from `fields`.
pub async fn post_form(
    app: &Router,
    uri: &str,
    fields: &[(&str, &str)],
    cookie: Option<&str>,
) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let request = with_cookie(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded"),
        cookie,
    )
    .body(Body::from(body))
    .unwrap();
    send(app, request).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response<Body> {
    put_raw(app, uri, body.to_string(), cookie).await
}

pub async fn put_raw(
    app: &Router,
    uri: &str,
    body: String,
    cookie: Option<&str>,
) -> Response<Body> {
    let request = with_cookie(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json"),
        cookie,
    )
    .body(Body::from(body))
    .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should be a redirect")
        .to_str()
        .unwrap()
        .to_string()
}

/// Assert `response` is a 303 redirect to `target`.
pub fn assert_redirect(response: &Response<Body>, target: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), target);
}

/// The raw `Set-Cookie` header for the session cookie, if any.
pub fn session_set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("bichon.sid="))
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_admin(pool: &PgPool, username: &str, password: &str) -> Admin {
    let input = CreateAdmin {
        username: username.to_string(),
        password_hash: hash_password(password).expect("hashing should succeed"),
    };
    AdminRepo::create(pool, &input)
        .await
        .expect("admin creation should succeed")
}

/// Log in through the form and return the `Cookie` header value to send
/// on later requests.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = post_form(
        app,
        "/admin/login",
        &[("username", username), ("password", password)],
        None,
    )
    .await;
    assert_redirect(&response, "/admin");

    let set_cookie = session_set_cookie(&response).expect("login should set the session cookie");
    set_cookie
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// Seed the default admin and log in as them.
pub async fn signed_in_app(pool: PgPool) -> (Router, String) {
    create_admin(&pool, TEST_USERNAME, TEST_PASSWORD).await;
    let app = build_test_app(pool);
    let cookie = login(&app, TEST_USERNAME, TEST_PASSWORD).await;
    (app, cookie)
}
