//! Handlers for admin login and logout.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use bichon_db::repositories::AdminRepo;
use serde::Deserialize;
use tower_sessions::Session;

use crate::auth::password::verify_password;
use crate::auth::session::{self, AdminUser, RedirectIfAuthenticated, DASHBOARD_PATH};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::admin::LoginView;
use crate::views::page;

/// Shown for both unknown usernames and wrong passwords.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Shown when the lookup or verification itself fails.
pub const LOGIN_FAILED: &str = "An error occurred. Please try again.";

/// Form body for `POST /admin/login`. Missing fields are empty.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

fn login_view(error: Option<&str>) -> Html<String> {
    page("Admin Login", None, LoginView { error }.render())
}

/// Look up `username` and check `password` against its stored hash.
///
/// `Ok(None)` covers both "no such admin" and "wrong password".
async fn authenticate(state: &AppState, form: &LoginForm) -> AppResult<Option<AdminUser>> {
    let Some(admin) = AdminRepo::find_by_username(&state.pool, &form.username).await? else {
        return Ok(None);
    };

    let valid = verify_password(&form.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    Ok(valid.then(|| AdminUser {
        id: admin.id,
        username: admin.username,
    }))
}

/// GET /admin/login
pub async fn login_page(_guard: RedirectIfAuthenticated) -> Html<String> {
    login_view(None)
}

/// POST /admin/login
pub async fn login_submit(
    State(state): State<AppState>,
    RedirectIfAuthenticated(session): RedirectIfAuthenticated,
    Form(form): Form<LoginForm>,
) -> Response {
    let admin = match authenticate(&state, &form).await {
        Ok(Some(admin)) => admin,
        Ok(None) => {
            tracing::info!(username = %form.username, "Rejected admin login");
            return login_view(Some(INVALID_CREDENTIALS)).into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Login error");
            return login_view(Some(LOGIN_FAILED)).into_response();
        }
    };

    let username = admin.username.clone();
    if let Err(e) = session::sign_in(&session, admin).await {
        tracing::error!(error = %e, "Failed to start admin session");
        return login_view(Some(LOGIN_FAILED)).into_response();
    }

    tracing::info!(username = %username, "Admin logged in");
    Redirect::to(DASHBOARD_PATH).into_response()
}

/// GET /admin/logout
///
/// Always redirects home; a store failure is only logged.
pub async fn logout(session: Session) -> Redirect {
    if let Err(e) = session::sign_out(&session).await {
        tracing::error!(error = %e, "Logout error");
    }
    Redirect::to("/")
}
