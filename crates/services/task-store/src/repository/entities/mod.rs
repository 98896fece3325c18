//! Stored document shapes.

pub mod task;
pub mod user;

pub use task::TaskDocument;
pub use user::UserDocument;
