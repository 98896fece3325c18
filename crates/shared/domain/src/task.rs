//! Task domain entity.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_PENDING};
use crate::error::DomainError;

/// Task progress state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => STATUS_PENDING,
            TaskStatus::InProgress => STATUS_IN_PROGRESS,
            TaskStatus::Completed => STATUS_COMPLETED,
        }
    }
}

impl FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(TaskStatus::Pending),
            STATUS_IN_PROGRESS => Ok(TaskStatus::InProgress),
            STATUS_COMPLETED => Ok(TaskStatus::Completed),
            other => Err(DomainError::validation(format!("unknown task status '{other}'"))),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task domain entity
///
/// `user_id` references the owning user. It is set once at creation and the
/// storage layer does not check that the user exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
}

impl Task {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Task creation data, carries no identifier
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewTask {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub status: TaskStatus,
}

impl NewTask {
    /// Build the stored record once an identifier has been assigned
    pub fn into_task(self, id: String) -> Task {
        Task {
            id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status: self.status,
        }
    }
}
