//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- the admin session payload and the route guards built on it.

pub mod password;
pub mod session;
