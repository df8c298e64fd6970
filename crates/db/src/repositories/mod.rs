//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod post_repo;
pub mod story_scene_repo;

pub use admin_repo::AdminRepo;
pub use post_repo::PostRepo;
pub use story_scene_repo::StorySceneRepo;
