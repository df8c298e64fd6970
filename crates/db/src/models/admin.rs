//! Admin account model and DTOs.

use bichon_core::types::DbId;
use sqlx::FromRow;

/// Full admin row from the `admins` table.
///
/// Contains the password hash -- never serialize this into a response.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
}

/// DTO for seeding a new admin.
#[derive(Debug)]
pub struct CreateAdmin {
    pub username: String,
    pub password_hash: String,
}
