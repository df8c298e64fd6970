//! Request handlers.
//!
//! HTML handlers render views from `crate::views` and map failures through
//! [`AppError`](crate::error::AppError) or a flash redirect. Story handlers
//! speak JSON and fail with [`StoryApiError`](crate::error::StoryApiError).

pub mod auth;
pub mod dashboard;
pub mod posts;
pub mod public;
pub mod story;
