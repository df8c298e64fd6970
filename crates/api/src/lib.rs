//! Bichon website server library.
//!
//! Exposes configuration, state, sessions, views, handlers and the router so
//! the binaries and the integration tests share one construction path.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
