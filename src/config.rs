//! Configuration management for Seatmap server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Application configuration. Every field is supplied by config/default.toml;
/// the run-mode file and environment only override.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix SEATMAP_)
            .add_source(
                Environment::with_prefix("SEATMAP")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override database URL from DATABASE_URL env var if present
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_provides_complete_config() {
        // config/default.toml must carry every field on its own
        let config: AppConfig = Config::builder()
            .add_source(File::with_name("config/default"))
            .build()
            .expect("Failed to read config/default")
            .try_deserialize()
            .expect("config/default is incomplete");

        assert!(!config.server.host.is_empty());
        assert!(config.server.port > 0);
        assert!(config.database.max_connections >= config.database.min_connections);
        assert!(!config.logging.level.is_empty());
    }
}
