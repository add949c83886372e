//! Configuration module for the Users service.
//!
//! Loads configuration from YAML files and environment variables.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

/// HTTP surface configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Path the users collection is mounted under.
    pub base_path: String,
}

/// Log output settings. `RUST_LOG` still wins over `filter` when set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub filter: String,
}

/// Shape of emitted log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event, for log shippers.
    #[default]
    Json,
    /// Human-readable lines, for local development.
    Pretty,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (USERS__*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(false))
            // Layer on local overrides
            .add_source(File::with_name("config/local").required(false))
            // Layer on environment variables with USERS prefix
            .add_source(
                Environment::with_prefix("USERS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://users.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: "/users".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            filter: "users_service=info,tower_http=info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Base path with a leading slash and no trailing slash.
    pub fn normalized_base_path(&self) -> String {
        let trimmed = self.base_path.trim().trim_matches('/');
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.api.base_path, "/users");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_normalized_base_path() {
        let api = ApiConfig {
            base_path: "users/".to_string(),
        };
        assert_eq!(api.normalized_base_path(), "/users");

        let nested = ApiConfig {
            base_path: "/v1/users".to_string(),
        };
        assert_eq!(nested.normalized_base_path(), "/v1/users");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = ConfigLoader::builder()
            .add_source(File::from_str(
                "server:\n  host: 0.0.0.0\n  port: 9000\n",
                config::FileFormat::Yaml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.api.base_path, "/users");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_partial_sections_fill_missing_fields() {
        let config: Config = ConfigLoader::builder()
            .add_source(File::from_str(
                "server:\n  port: 9000\ndatabase:\n  max_connections: 2\nlogging:\n  format: pretty\n",
                config::FileFormat::Yaml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.max_connections, 2);
        assert_eq!(config.database.url, "sqlite://users.db?mode=rwc");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.logging.filter, "users_service=info,tower_http=info");
    }
}
