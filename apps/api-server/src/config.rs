//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use board_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub uploads: UploadConfig,
}

/// Where uploaded images go and how they are referenced.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub public_prefix: String,
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public/image"),
            public_prefix: board_core::attachment::DEFAULT_PUBLIC_PREFIX.to_string(),
            max_bytes: 10 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    ///
    /// The schema is only pinned when `DATABASE_NAME` (or the migration CLI's
    /// `DATABASE_SCHEMA`) is set; otherwise the server uses the connection's
    /// default search path, which is where `migration up` creates `posts`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL")
            .or_else(|| lookup("DB_URL"))
            .map(|url| DatabaseConfig {
                url,
                database_name: lookup("DATABASE_NAME").or_else(|| lookup("DATABASE_SCHEMA")),
                max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS").unwrap_or(10),
                min_connections: parse_var(&lookup, "DB_MIN_CONNECTIONS").unwrap_or(1),
            });

        let defaults = UploadConfig::default();
        let uploads = UploadConfig {
            dir: lookup("UPLOAD_DIR").map(PathBuf::from).unwrap_or(defaults.dir),
            public_prefix: lookup("IMAGE_PUBLIC_PREFIX").unwrap_or(defaults.public_prefix),
            max_bytes: parse_var(&lookup, "MAX_UPLOAD_BYTES").unwrap_or(defaults.max_bytes),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&lookup, "PORT").unwrap_or(8080),
            database,
            uploads,
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    lookup(key).and_then(|s| s.parse().ok())
}
