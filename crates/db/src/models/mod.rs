//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and updates where the API accepts them

pub mod admin;
pub mod post;
pub mod story_scene;
