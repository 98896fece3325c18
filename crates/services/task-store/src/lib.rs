//! Task Store Library
//!
//! Persistence for tasks and users on a document database. Callers depend
//! on the [`TaskRepository`] and [`UserRepository`] traits; the concrete
//! stores reach storage only through the
//! [`DocumentCollection`](collection::DocumentCollection) abstraction, so a
//! live MongoDB collection and an in-memory one are interchangeable.

pub mod collection;
pub mod commands;
pub mod config;
pub mod infra;
pub mod repository;

use std::sync::Arc;

use crate::collection::{DocumentCollection, InMemoryCollection};
use crate::infra::Database;

pub use crate::repository::{TaskRepository, TaskStore, UserRepository, UserStore};

/// Both repositories, ready to hand to application services.
#[derive(Clone)]
pub struct Stores {
    pub tasks: Arc<dyn TaskRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Stores {
    pub fn new(
        task_collection: Arc<dyn DocumentCollection>,
        user_collection: Arc<dyn DocumentCollection>,
    ) -> Self {
        Self {
            tasks: Arc::new(TaskStore::new(task_collection)),
            users: Arc::new(UserStore::new(user_collection)),
        }
    }

    /// Repositories bound to the live database collections
    pub fn from_database(db: &Database) -> Self {
        Self::new(Arc::new(db.tasks()), Arc::new(db.users()))
    }

    /// Repositories over fresh in-memory collections
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCollection::new()),
            Arc::new(InMemoryCollection::new()),
        )
    }
}
