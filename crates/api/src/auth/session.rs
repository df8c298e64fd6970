//! Cookie-backed admin sessions and the extractors that gate admin routes.
//!
//! A signed-in session carries two keys: [`AUTHENTICATED_KEY`] and
//! [`ADMIN_USER_KEY`]. The gates only look at the flag; the user snapshot
//! is there for views.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use bichon_core::types::DbId;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use time::{Duration, OffsetDateTime};
use tower_sessions::cookie::Key;
use tower_sessions::{Expiry, Session};

use crate::error::AppError;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "bichon.sid";

/// Lifetime of a session, counted from login.
pub const SESSION_MAX_AGE_HOURS: i64 = 24;

pub const AUTHENTICATED_KEY: &str = "is_authenticated";
pub const ADMIN_USER_KEY: &str = "admin_user";

pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/admin";

/// Snapshot of the signed-in admin stored in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: DbId,
    pub username: String,
}

/// Derive the 64-byte cookie signing key from the configured secret.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Mark the session as signed in for `admin`.
///
/// The session id is rotated first so a pre-login id cannot be reused, and
/// the expiry is pinned to login time plus [`SESSION_MAX_AGE_HOURS`].
pub async fn sign_in(session: &Session, admin: AdminUser) -> Result<(), AppError> {
    session.cycle_id().await?;
    session.insert(AUTHENTICATED_KEY, true).await?;
    session.insert(ADMIN_USER_KEY, admin).await?;

    let expires_at = OffsetDateTime::now_utc() + Duration::hours(SESSION_MAX_AGE_HOURS);
    session.set_expiry(Some(Expiry::AtDateTime(expires_at)));
    Ok(())
}

/// Destroy the session and its stored data.
pub async fn sign_out(session: &Session) -> Result<(), AppError> {
    session.flush().await?;
    Ok(())
}

/// The signed-in admin, if the session carries the authenticated flag.
///
/// Store failures are logged and treated as signed out.
pub async fn authenticated_admin(session: &Session) -> Option<AdminUser> {
    let authenticated = match session.get::<bool>(AUTHENTICATED_KEY).await {
        Ok(flag) => flag.unwrap_or(false),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read session");
            return None;
        }
    };
    if !authenticated {
        return None;
    }

    match session.get::<AdminUser>(ADMIN_USER_KEY).await {
        Ok(admin) => admin,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read admin from session");
            None
        }
    }
}

async fn session_from_parts<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
) -> Result<Session, Response> {
    Session::from_request_parts(parts, state)
        .await
        .map_err(|rejection| {
            tracing::error!("Session layer missing from router");
            rejection.into_response()
        })
}

// ---------------------------------------------------------------------------
// Extractors
// ---------------------------------------------------------------------------

/// Requires a signed-in admin; otherwise redirects to the login page.
///
/// ```ignore
/// async fn dashboard(RequireAuth(admin): RequireAuth) -> Html<String> { .. }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AdminUser);

impl<S: Send + Sync> FromRequestParts<S> for RequireAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = session_from_parts(parts, state).await?;
        match authenticated_admin(&session).await {
            Some(admin) => Ok(RequireAuth(admin)),
            None => Err(Redirect::to(LOGIN_PATH).into_response()),
        }
    }
}

/// Passes only when nobody is signed in; otherwise redirects to the dashboard.
///
/// Carries the session so the login handler can sign in through it.
#[derive(Debug, Clone)]
pub struct RedirectIfAuthenticated(pub Session);

impl<S: Send + Sync> FromRequestParts<S> for RedirectIfAuthenticated {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = session_from_parts(parts, state).await?;
        if authenticated_admin(&session).await.is_some() {
            return Err(Redirect::to(DASHBOARD_PATH).into_response());
        }
        Ok(RedirectIfAuthenticated(session))
    }
}

/// The signed-in admin for layouts on pages that do not require one.
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub Option<AdminUser>);

impl<S: Send + Sync> FromRequestParts<S> for CurrentAdmin {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = session_from_parts(parts, state).await?;
        Ok(CurrentAdmin(authenticated_admin(&session).await))
    }
}
