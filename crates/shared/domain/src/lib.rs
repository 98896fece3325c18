//! Domain layer - Task and user entities and the ownership scope.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Identifiers are carried as fixed-format hexadecimal strings; the storage
//! crate translates them to and from its native id type.

pub mod constants;
pub mod error;
pub mod scope;
pub mod task;
pub mod user;

pub use constants::*;
pub use error::DomainError;
pub use scope::TaskScope;
pub use task::{NewTask, Task, TaskStatus};
pub use user::{NewUser, UpdateUser, User, UserRole};
