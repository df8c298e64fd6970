//! Shared application router builder.
//!
//! [`build_app_router`] is used by both `main.rs` and the integration tests
//! so they run the same middleware stack. Only the session store differs.

use std::any::Any;
use std::time::Duration;

use axum::handler::HandlerWithoutStateExt;
use axum::http::{HeaderName, StatusCode};
use axum::response::Response;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_sessions::cookie::SameSite;
use tower_sessions::{SessionManagerLayer, SessionStore};
use tracing::Level;

use crate::auth::session::{signing_key, SESSION_COOKIE_NAME};
use crate::config::SessionConfig;
use crate::handlers::public::not_found;
use crate::routes;
use crate::state::AppState;
use crate::views::{self, Notice};

/// Build the full application [`Router`] with all middleware layers.
///
/// Requests that match no route are served from the static directory, and
/// fall through to the 404 page from there. The middleware stack is applied
/// bottom-up:
///
/// 1. Set request ID on incoming requests
/// 2. Structured request/response tracing
/// 3. Propagate request ID to response
/// 4. Request timeout
/// 5. Panic recovery (catch panics, render the error page)
/// 6. Sessions
pub fn build_app_router<Store>(state: AppState, store: Store) -> Router
where
    Store: SessionStore + Clone,
{
    let request_id_header = HeaderName::from_static("x-request-id");
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    let session = &state.config.session;
    let session_layer = SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_http_only(true)
        .with_secure(session.production)
        .with_same_site(cookie_same_site(session))
        .with_signed(signing_key(&session.secret));

    let static_files = ServeDir::new(&state.config.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(not_found.into_service());

    Router::new()
        .merge(routes::app_routes())
        .fallback_service(static_files)
        // -- Middleware stack (applied bottom-up) --
        // Cookie-backed sessions.
        .layer(session_layer)
        // Panic recovery: catch panics and render the 500 page.
        .layer(CatchPanicLayer::custom(handle_panic))
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // Shared state.
        .with_state(state)
}

/// `Lax` in production, `Strict` elsewhere.
fn cookie_same_site(config: &SessionConfig) -> SameSite {
    if config.production {
        SameSite::Lax
    } else {
        SameSite::Strict
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Handler panicked");

    views::status_page(Notice::ServerError, None)
}
