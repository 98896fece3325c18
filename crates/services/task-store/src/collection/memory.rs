//! In-memory document collection.
//!
//! Keeps documents in insertion order and matches filters by top-level
//! equality, which is all the repositories ask of a collection.

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use common::{AppError, AppResult};

use super::DocumentCollection;

#[derive(Debug, Default)]
pub struct InMemoryCollection {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentCollection for InMemoryCollection {
    async fn insert_one(&self, mut document: Document) -> AppResult<Bson> {
        let mut documents = self.documents.write().await;

        let id = match document.get("_id") {
            Some(id) => id.clone(),
            None => {
                let id = Bson::ObjectId(ObjectId::new());
                document.insert("_id", id.clone());
                id
            }
        };

        if documents.iter().any(|d| d.get("_id") == Some(&id)) {
            return Err(AppError::conflict(format!("document {id}")));
        }

        documents.push(document);
        Ok(id)
    }

    async fn find_one(&self, filter: Document) -> AppResult<Option<Document>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| matches(d, &filter)).cloned())
    }

    async fn find(&self, filter: Document) -> AppResult<Vec<Document>> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|d| matches(d, &filter))
            .cloned()
            .collect())
    }

    async fn delete_one(&self, filter: Document) -> AppResult<u64> {
        let mut documents = self.documents.write().await;
        match documents.iter().position(|d| matches(d, &filter)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_many(&self, filter: Document) -> AppResult<u64> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|d| !matches(d, &filter));
        Ok((before - documents.len()) as u64)
    }

    async fn replace_one(&self, filter: Document, mut replacement: Document) -> AppResult<u64> {
        let mut documents = self.documents.write().await;
        let Some(existing) = documents.iter_mut().find(|d| matches(d, &filter)) else {
            return Ok(0);
        };

        // _id is immutable
        if let Some(id) = existing.get("_id").cloned() {
            replacement.insert("_id", id);
        }
        *existing = replacement;
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use bson::doc;

    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_missing_id() {
        let collection = InMemoryCollection::new();
        let id = collection.insert_one(doc! { "name": "a" }).await.unwrap();

        assert!(id.as_object_id().is_some());
        let found = collection.find_one(doc! { "_id": id }).await.unwrap();
        assert_eq!(found.unwrap().get_str("name").unwrap(), "a");
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let collection = InMemoryCollection::new();
        let id = ObjectId::new();
        collection.insert_one(doc! { "_id": id }).await.unwrap();

        let result = collection.insert_one(doc! { "_id": id }).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(collection.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_filters_by_equality() {
        let collection = InMemoryCollection::new();
        collection.insert_one(doc! { "owner": "a" }).await.unwrap();
        collection.insert_one(doc! { "owner": "b" }).await.unwrap();
        collection.insert_one(doc! { "owner": "a" }).await.unwrap();

        assert_eq!(collection.find(doc! { "owner": "a" }).await.unwrap().len(), 2);
        assert_eq!(collection.find(doc! {}).await.unwrap().len(), 3);
        assert!(collection.find(doc! { "owner": "c" }).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_counts() {
        let collection = InMemoryCollection::new();
        collection.insert_one(doc! { "owner": "a" }).await.unwrap();
        collection.insert_one(doc! { "owner": "a" }).await.unwrap();

        assert_eq!(collection.delete_one(doc! { "owner": "z" }).await.unwrap(), 0);
        assert_eq!(collection.delete_one(doc! { "owner": "a" }).await.unwrap(), 1);
        assert_eq!(collection.delete_many(doc! {}).await.unwrap(), 1);
        assert!(collection.is_empty().await);
    }

    #[tokio::test]
    async fn test_replace_keeps_id_and_never_upserts() {
        let collection = InMemoryCollection::new();
        let id = collection.insert_one(doc! { "name": "old" }).await.unwrap();

        let matched = collection
            .replace_one(doc! { "name": "old" }, doc! { "name": "new" })
            .await
            .unwrap();
        assert_eq!(matched, 1);

        let stored = collection.find_one(doc! { "_id": id }).await.unwrap().unwrap();
        assert_eq!(stored.get_str("name").unwrap(), "new");

        let matched = collection
            .replace_one(doc! { "name": "missing" }, doc! { "name": "x" })
            .await
            .unwrap();
        assert_eq!(matched, 0);
        assert_eq!(collection.len().await, 1);
    }
}
