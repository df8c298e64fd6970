//! Domain logic shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O; every function is deterministic and
//! unit-tested in place.

pub mod dashboard;
pub mod error;
pub mod flash;
pub mod post;
pub mod story;
pub mod types;
