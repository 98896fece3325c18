//! Database connection and collection handles.

use std::time::Duration;

use bson::{doc, Document};
use mongodb::{options::ClientOptions, Client};

use common::{AppResult, DatabaseConfig};

use crate::collection::MongoCollection;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    database: mongodb::Database,
    task_collection: String,
    user_collection: String,
}

impl Database {
    /// Build a client from the configuration.
    ///
    /// The driver connects lazily, so this succeeds without a reachable
    /// server; use [`Database::ping`] to check connectivity.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        let timeout = Duration::from_millis(config.connect_timeout_ms);
        options.app_name = Some(config.app_name.clone());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        tracing::info!(database = %config.database, "Database client initialized");

        Ok(Self {
            database: client.database(&config.database),
            task_collection: config.task_collection.clone(),
            user_collection: config.user_collection.clone(),
        })
    }

    /// Check database connectivity.
    pub async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    pub fn tasks(&self) -> MongoCollection {
        MongoCollection::new(self.database.collection::<Document>(&self.task_collection))
    }

    pub fn users(&self) -> MongoCollection {
        MongoCollection::new(self.database.collection::<Document>(&self.user_collection))
    }
}
