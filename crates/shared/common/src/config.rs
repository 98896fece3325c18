//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Document database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection string, e.g. `mongodb://localhost:27017`
    pub uri: String,
    /// Database holding the task and user collections
    pub database: String,
    pub task_collection: String,
    pub user_collection: String,
    /// Server selection / connect timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Application name reported to the server
    pub app_name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "task_manager".to_string(),
            task_collection: "tasks".to_string(),
            user_collection: "users".to_string(),
            connect_timeout_ms: 5000,
            app_name: "task-store".to_string(),
        }
    }
}

/// Logging configuration for binaries.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
