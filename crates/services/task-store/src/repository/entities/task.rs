//! Task document as stored in the task collection.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use domain::{NewTask, Task, TaskStatus};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Owner reference, stored as the owner's hex identifier
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Stored as a BSON datetime, so precision is milliseconds
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub status: TaskStatus,
}

impl TaskDocument {
    /// The due date is truncated to milliseconds so the document matches
    /// what the collection stores.
    pub fn new(id: ObjectId, task: NewTask) -> Self {
        Self {
            id,
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            due_date: bson::DateTime::from_chrono(task.due_date).to_chrono(),
            status: task.status,
        }
    }
}

/// Convert stored document to domain entity
impl From<TaskDocument> for Task {
    fn from(document: TaskDocument) -> Self {
        Task {
            id: document.id.to_hex(),
            user_id: document.user_id,
            title: document.title,
            description: document.description,
            due_date: document.due_date,
            status: document.status,
        }
    }
}
