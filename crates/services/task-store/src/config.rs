//! Task store configuration.

use std::env;

use common::{DatabaseConfig, LogConfig};

/// Task store configuration.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

impl StoreConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                uri: env::var("MONGODB_URI").unwrap_or(defaults.uri),
                database: env::var("MONGODB_DATABASE").unwrap_or(defaults.database),
                task_collection: env::var("TASK_COLLECTION").unwrap_or(defaults.task_collection),
                user_collection: env::var("USER_COLLECTION").unwrap_or(defaults.user_collection),
                connect_timeout_ms: env::var("MONGODB_CONNECT_TIMEOUT_MS")
                    .ok()
                    .and_then(|ms| ms.parse().ok())
                    .unwrap_or(defaults.connect_timeout_ms),
                app_name: env::var("MONGODB_APP_NAME").unwrap_or(defaults.app_name),
            },
            log: LogConfig {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| LogConfig::default().level),
            },
        }
    }
}
