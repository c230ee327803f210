//! Configuration module with per-concern sub-modules
//!
//! - `audit` - Audit trail write policy
//! - `database` - Storage selection and connection pool settings
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//!
//! Values are layered with the `config` crate. Later sources win:
//! built-in defaults, `config/default.toml`, `config/{environment}.toml`,
//! `APP__SECTION__KEY` variables and finally the well-known variables
//! `DATABASE_URL`, `SERVER_HOST` and `SERVER_PORT`.

pub mod audit;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::errors::ConfigError;

// Re-export commonly used types
pub use audit::AuditConfig;
pub use database::{DatabaseConfig, StorageKind, MEMORY_URL};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Prefix of structured environment overrides, e.g. `APP__SERVER__PORT`
pub const ENV_PREFIX: &str = "APP";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
    pub audit: AuditConfig,
}

impl AppConfig {
    /// Load configuration relative to the current working directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(".")
    }

    /// Load configuration with config files resolved under `base_dir`
    pub fn load_from(base_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let base_dir = base_dir.as_ref();

        let default_file = base_dir.join("config/default");
        let env_file = base_dir.join(environment.config_file());

        let logging = LoggingConfig::for_environment(environment);

        let builder = config::Config::builder()
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format.as_str())?
            .set_default("logging.with_target", logging.with_target)?
            .add_source(config::File::from(default_file).required(false))
            .add_source(config::File::from(env_file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("environment", environment.to_string())?
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .set_override_option("server.host", env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", env::var("SERVER_PORT").ok())?;

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration used by tests: embedded store, strict auditing
    pub fn for_tests() -> Self {
        Self {
            environment: Environment::Staging,
            database: DatabaseConfig::new(MEMORY_URL),
            audit: AuditConfig::strict(),
            ..Default::default()
        }
    }

    /// Reject combinations that cannot start a server
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid {
                key: "server.port".to_string(),
                reason: "port must be greater than 0".to_string(),
            });
        }
        if self.database.storage_kind() == StorageKind::Memory
            && self.database.url != MEMORY_URL
        {
            return Err(ConfigError::Invalid {
                key: "database.url".to_string(),
                reason: format!(
                    "unsupported database URL '{}', expected '{}' or postgres://",
                    self.database.redacted_url(),
                    MEMORY_URL
                ),
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "database.max_connections".to_string(),
                reason: "pool needs at least one connection".to_string(),
            });
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
