//! Route definitions for the public blog.

use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET /           -> index
/// GET /post/{id}  -> show
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(public::index))
        .route("/post/{id}", get(public::show))
}
