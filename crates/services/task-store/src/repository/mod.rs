//! Repository layer for data access.

pub mod entities;
mod task_repository;
mod user_repository;

pub use task_repository::{TaskRepository, TaskStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use task_repository::MockTaskRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
