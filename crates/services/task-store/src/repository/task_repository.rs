//! Task repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{debug, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{is_valid_object_id_hex, NewTask, Task, TaskScope, User};

use super::entities::TaskDocument;
use crate::collection::{filter, DocumentCollection};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const ENTITY: &str = "task";

/// Task repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persist a new task under a freshly assigned identifier. The owner
    /// reference must be a well-formed user identifier.
    async fn save(&self, task: NewTask) -> AppResult<Task>;

    /// Find task by ID, `NotFound` when absent
    async fn find_by_id(&self, id: &str) -> AppResult<Task>;

    /// Tasks visible to the requesting user: all of them for admins,
    /// otherwise only the ones they own
    async fn find_all(&self, user: &User) -> AppResult<Vec<Task>>;

    /// Delete task by ID, `NotFound` when nothing was removed
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of TaskRepository over a document collection
pub struct TaskStore {
    collection: Arc<dyn DocumentCollection>,
}

impl TaskStore {
    /// Create new repository instance
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl TaskRepository for TaskStore {
    async fn save(&self, task: NewTask) -> AppResult<Task> {
        if !is_valid_object_id_hex(&task.user_id) {
            return Err(AppError::validation(format!(
                "invalid task owner '{}'",
                task.user_id
            )));
        }

        let mut document = TaskDocument::new(ObjectId::new(), task);

        let inserted = self
            .collection
            .insert_one(bson::to_document(&document)?)
            .await?;
        document.id = inserted
            .as_object_id()
            .ok_or_else(|| AppError::internal(format!("unexpected task identifier {inserted}")))?;

        debug!(task_id = %document.id, owner = %document.user_id, "task saved");
        Ok(Task::from(document))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Task> {
        let document = self
            .collection
            .find_one(filter::by_id(id)?)
            .await?
            .ok_or_not_found(ENTITY)?;

        let document: TaskDocument = bson::from_document(document)?;
        Ok(Task::from(document))
    }

    async fn find_all(&self, user: &User) -> AppResult<Vec<Task>> {
        let scope = TaskScope::for_user(user);
        let documents = self.collection.find(filter::for_scope(&scope)).await?;

        let tasks = documents
            .into_iter()
            .map(|d| bson::from_document::<TaskDocument>(d).map(Task::from))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(user_id = %user.id, ?scope, count = tasks.len(), "tasks listed");
        Ok(tasks)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let deleted = self.collection.delete_one(filter::by_id(id)?).await?;

        if deleted == 0 {
            warn!(task_id = %id, "delete matched no task");
            return Err(AppError::not_found(ENTITY));
        }

        debug!(task_id = %id, "task deleted");
        Ok(())
    }
}
