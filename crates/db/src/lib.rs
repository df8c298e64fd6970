//! Persistence gateway for the blog and story editor.
//!
//! Owns pool construction, schema migrations, connection-failure
//! classification, and the per-table repositories. Database errors are
//! returned to callers unmodified as [`sqlx::Error`].

use std::fmt;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub mod connection;
pub mod models;
pub mod repositories;

pub use connection::is_connection_error;

pub type DbPool = sqlx::PgPool;

/// Upper bound on concurrently open connections.
pub const MAX_CONNECTIONS: u32 = 10;

/// Connection settings for the PostgreSQL database.
///
/// When `url` is set it takes precedence over the discrete fields.
#[derive(Clone)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Require TLS. Server certificates are not verified.
    pub ssl: bool,
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("ssl", &self.ssl)
            .finish()
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            name: "bichon_website".to_string(),
            ssl: false,
        }
    }
}

impl DatabaseSettings {
    /// Build driver connect options from these settings.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }

        let ssl_mode = if self.ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Disable
        };

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(ssl_mode))
    }
}

/// Create a connection pool capped at [`MAX_CONNECTIONS`].
pub async fn create_pool(settings: &DatabaseSettings) -> Result<DbPool, sqlx::Error> {
    let options = settings.connect_options()?;
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await;

    match &pool {
        Ok(_) => tracing::debug!("Connected to database"),
        Err(err) if is_connection_error(err) => {
            tracing::error!(error = %err, "Database connection failed");
        }
        Err(err) => tracing::error!(error = %err, "Database pool setup failed"),
    }

    pool
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded SQL migrations in `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
