//! Collection abstraction.
//!
//! Repositories talk to storage only through [`DocumentCollection`], which
//! exposes the handful of driver operations they use. The live binding is
//! [`MongoCollection`]; tests substitute [`InMemoryCollection`] or the
//! generated `MockDocumentCollection`.

pub mod filter;
mod memory;
mod mongo;

use async_trait::async_trait;
use bson::{Bson, Document};

use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use memory::InMemoryCollection;
pub use mongo::MongoCollection;

/// Minimal document collection capability.
///
/// Filters are equality maps such as `{"_id": <ObjectId>}` or
/// `{"user_id": "<hex>"}`; an empty document matches everything.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// Insert a document, returning the identifier it was stored under
    async fn insert_one(&self, document: Document) -> AppResult<Bson>;

    /// First document matching the filter, if any
    async fn find_one(&self, filter: Document) -> AppResult<Option<Document>>;

    /// All documents matching the filter
    async fn find(&self, filter: Document) -> AppResult<Vec<Document>>;

    /// Remove the first matching document, returning the deleted count
    async fn delete_one(&self, filter: Document) -> AppResult<u64>;

    /// Remove every matching document, returning the deleted count
    async fn delete_many(&self, filter: Document) -> AppResult<u64>;

    /// Replace the first matching document, returning the matched count.
    /// Never inserts when nothing matches.
    async fn replace_one(&self, filter: Document, replacement: Document) -> AppResult<u64>;
}
