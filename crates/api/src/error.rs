use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bichon_core::error::CoreError;
use bichon_core::post::POST_ENTITY;
use serde_json::json;

use crate::views::{self, Notice};

/// Error type for HTML handlers.
///
/// Wraps [`CoreError`] for domain errors and adds infrastructure variants.
/// Every variant is logged; the browser only ever sees the generic error page,
/// or a 404 page for [`CoreError::NotFound`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bichon_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The session store failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let notice = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id = %id, "Not found");
                if *entity == POST_ENTITY {
                    Notice::PostNotFound
                } else {
                    Notice::NotFound
                }
            }
            AppError::Database(err) if bichon_db::is_connection_error(err) => {
                tracing::error!(error = %err, "Database unreachable");
                Notice::ServerError
            }
            other => {
                tracing::error!(error = %other, "Request failed");
                Notice::ServerError
            }
        };

        views::status_page(notice, None)
    }
}

/// Error type for the JSON story API.
///
/// Responds with `{ "success": false, "error": <message> }`. Unlike
/// [`AppError`] the database error text is passed through.
#[derive(Debug, thiserror::Error)]
pub enum StoryApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be read as a scene update.
    #[error("{0}")]
    BadRequest(String),
}

/// Convenience type alias for story API handlers.
pub type StoryApiResult<T> = Result<T, StoryApiError>;

impl IntoResponse for StoryApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            StoryApiError::Core(CoreError::NotFound { entity, .. }) => {
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            StoryApiError::Core(CoreError::Validation(msg)) | StoryApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            StoryApiError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Story API internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            StoryApiError::Database(err) => {
                tracing::error!(
                    error = %err,
                    connection = bichon_db::is_connection_error(err),
                    "Story API database error"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = json!({
            "success": false,
            "error": message,
        });

        (status, Json(body)).into_response()
    }
}

