//! Task visibility scope.
//!
//! The scope is decided from the requesting user before any query is built,
//! so the rule can be checked without a database.

use crate::task::Task;
use crate::user::User;

/// Which tasks a requesting user may see
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskScope {
    /// Every task, regardless of owner
    All,
    /// Only tasks whose owner reference equals the given user id
    OwnedBy(String),
}

impl TaskScope {
    /// Admins see everything, everyone else sees their own tasks
    pub fn for_user(user: &User) -> Self {
        if user.is_admin() {
            TaskScope::All
        } else {
            TaskScope::OwnedBy(user.id.clone())
        }
    }

    pub fn permits(&self, task: &Task) -> bool {
        match self {
            TaskScope::All => true,
            TaskScope::OwnedBy(owner) => task.is_owned_by(owner),
        }
    }
}
