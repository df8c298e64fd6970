//! Handler for the admin dashboard.

use axum::extract::State;
use axum::response::Html;
use bichon_core::dashboard::{start_of_month, DashboardStats};
use bichon_core::post::DASHBOARD_RECENT_LIMIT;
use bichon_db::repositories::PostRepo;
use bichon_db::DbPool;
use chrono::{Local, Utc};

use crate::auth::session::RequireAuth;
use crate::state::AppState;
use crate::views::admin::DashboardView;
use crate::views::page;

/// Run the three dashboard queries. They are independent reads, so the
/// counts may disagree slightly under concurrent writes.
async fn load(pool: &DbPool) -> Result<DashboardView, sqlx::Error> {
    let total_posts = PostRepo::count(pool).await?;

    let month_start = start_of_month(&Local::now()).with_timezone(&Utc);
    let recent_count = PostRepo::count_since(pool, month_start).await?;

    let recent_posts = PostRepo::recent(pool, DASHBOARD_RECENT_LIMIT).await?;

    Ok(DashboardView {
        stats: DashboardStats {
            total_posts,
            recent_posts: recent_count,
        },
        recent_posts,
    })
}

/// GET /admin
///
/// Renders zeroed stats when any query fails.
pub async fn dashboard(
    RequireAuth(admin): RequireAuth,
    State(state): State<AppState>,
) -> Html<String> {
    let view = load(&state.pool).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Dashboard error");
        DashboardView::default()
    });

    page("Dashboard", Some(&admin), view.render())
}
