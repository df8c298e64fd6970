//! Admin dashboard statistics.

use chrono::{DateTime, Datelike, NaiveTime, TimeDelta, TimeZone};

/// Post counters shown on the dashboard. Zeroed when the queries fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_posts: i64,
    /// Posts created on or after the first instant of the current month.
    pub recent_posts: i64,
}

/// First instant of the calendar month containing `now`, in `now`'s zone.
///
/// If local midnight on the 1st falls in a DST gap the first valid instant
/// after it is used.
pub fn start_of_month<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let today = now.date_naive();
    let first_day = today.with_day(1).unwrap_or(today);
    let midnight = first_day.and_time(NaiveTime::MIN);

    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + TimeDelta::hours(1)))
                .earliest()
        })
        .unwrap_or_else(|| now.clone())
}
