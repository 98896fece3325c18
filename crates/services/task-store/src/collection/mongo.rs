//! Live binding of the collection abstraction to the MongoDB driver.

use async_trait::async_trait;
use bson::{Bson, Document};
use futures::TryStreamExt;
use mongodb::Collection;

use common::AppResult;

use super::DocumentCollection;

/// Pass-through wrapper over a driver collection handle.
#[derive(Clone)]
pub struct MongoCollection {
    inner: Collection<Document>,
}

impl MongoCollection {
    pub fn new(inner: Collection<Document>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    async fn insert_one(&self, document: Document) -> AppResult<Bson> {
        let result = self.inner.insert_one(document, None).await?;
        Ok(result.inserted_id)
    }

    async fn find_one(&self, filter: Document) -> AppResult<Option<Document>> {
        Ok(self.inner.find_one(filter, None).await?)
    }

    async fn find(&self, filter: Document) -> AppResult<Vec<Document>> {
        let cursor = self.inner.find(filter, None).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn delete_one(&self, filter: Document) -> AppResult<u64> {
        let result = self.inner.delete_one(filter, None).await?;
        Ok(result.deleted_count)
    }

    async fn delete_many(&self, filter: Document) -> AppResult<u64> {
        let result = self.inner.delete_many(filter, None).await?;
        Ok(result.deleted_count)
    }

    async fn replace_one(&self, filter: Document, replacement: Document) -> AppResult<u64> {
        let result = self.inner.replace_one(filter, replacement, None).await?;
        Ok(result.matched_count)
    }
}
