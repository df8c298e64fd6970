use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use bichon_db::DatabaseSettings;

/// Fallback session secret for local development.
pub const DEFAULT_SESSION_SECRET: &str = "default-secret-change-in-production";

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be a valid {expected}, got {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Session cookie settings.
#[derive(Clone)]
pub struct SessionConfig {
    /// Secret the cookie signing key is derived from.
    pub secret: String,
    /// Production cookie policy: `Secure` and `SameSite=Lax`.
    pub production: bool,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("production", &self.production)
            .finish()
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served for unmatched GET requests (default: `public`).
    pub static_dir: PathBuf,
    pub database: DatabaseSettings,
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                               |
    /// |------------------------|---------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                             |
    /// | `PORT`                 | `3000`                                |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                  |
    /// | `STATIC_DIR`           | `public`                              |
    /// | `DATABASE_URL`         | unset                                 |
    /// | `DB_HOST`              | `localhost`                           |
    /// | `DB_PORT`              | `5432`                                |
    /// | `DB_USER`              | `postgres`                            |
    /// | `DB_PASSWORD`          | empty                                 |
    /// | `DB_NAME`              | `bichon_website`                      |
    /// | `DB_SSL`               | `false`                               |
    /// | `SESSION_SECRET`       | `default-secret-change-in-production` |
    /// | `APP_ENV`              | unset (`production` to harden cookies) |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = DatabaseSettings::default();

        let database = DatabaseSettings {
            url: var("DATABASE_URL"),
            host: var("DB_HOST").unwrap_or(defaults.host),
            port: parse_or(var("DB_PORT"), "DB_PORT", "port number", defaults.port)?,
            user: var("DB_USER").unwrap_or(defaults.user),
            password: var("DB_PASSWORD").unwrap_or(defaults.password),
            name: var("DB_NAME").unwrap_or(defaults.name),
            ssl: var("DB_SSL").is_some_and(|v| v == "true"),
        };

        let session = SessionConfig {
            secret: var("SESSION_SECRET").unwrap_or_else(|| DEFAULT_SESSION_SECRET.to_string()),
            production: var("APP_ENV").is_some_and(|v| v == "production"),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(var("PORT"), "PORT", "port number", 3000)?,
            request_timeout_secs: parse_or(
                var("REQUEST_TIMEOUT_SECS"),
                "REQUEST_TIMEOUT_SECS",
                "number of seconds",
                30,
            )?,
            static_dir: var("STATIC_DIR").map_or_else(|| PathBuf::from("public"), PathBuf::from),
            database,
            session,
        })
    }

    /// True when production mode still uses the built-in session secret.
    pub fn uses_default_secret_in_production(&self) -> bool {
        self.session.production && self.session.secret == DEFAULT_SESSION_SECRET
    }
}

fn parse_or<T: FromStr>(
    raw: Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError {
            var,
            expected,
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.database.name, "bichon_website");
        assert!(config.database.url.is_none());
        assert!(!config.database.ssl);
        assert_eq!(config.session.secret, DEFAULT_SESSION_SECRET);
        assert!(!config.session.production);
    }

    #[test]
    fn database_settings_are_read() {
        let config = load(&[
            ("DB_HOST", "db"),
            ("DB_PORT", "6543"),
            ("DB_USER", "blog"),
            ("DB_PASSWORD", "pw"),
            ("DB_NAME", "site"),
            ("DB_SSL", "true"),
        ])
        .unwrap();
        assert_eq!(config.database.host, "db");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.user, "blog");
        assert_eq!(config.database.password, "pw");
        assert_eq!(config.database.name, "site");
        assert!(config.database.ssl);
    }

    #[test]
    fn ssl_flag_requires_literal_true() {
        let config = load(&[("DB_SSL", "yes")]).unwrap();
        assert!(!config.database.ssl);
    }

    #[test]
    fn production_flag_and_default_secret_are_detected() {
        let config = load(&[("APP_ENV", "production")]).unwrap();
        assert!(config.session.production);
        assert!(config.uses_default_secret_in_production());

        let config = load(&[("APP_ENV", "production"), ("SESSION_SECRET", "s3cret")]).unwrap();
        assert!(!config.uses_default_secret_in_production());
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.var, "PORT");
        assert_eq!(err.value, "eighty");
    }

    #[test]
    fn debug_output_hides_secret() {
        let config = load(&[("SESSION_SECRET", "hunter2")]).unwrap();
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
