//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{debug, info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{NewUser, UpdateUser, User};

use super::entities::UserDocument;
use crate::collection::{filter, DocumentCollection};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const ENTITY: &str = "user";

/// User repository trait for dependency injection.
///
/// Usernames are expected to be unique, but nothing here enforces it; lookups
/// by username return the first match.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user under a freshly assigned identifier
    async fn save(&self, user: NewUser) -> AppResult<User>;

    /// Find user by ID, `NotFound` when absent
    async fn find_user(&self, id: &str) -> AppResult<User>;

    /// Find user by username. A missing user is `Ok(None)`, not an error.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// List all users
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Replace the mutable fields of the user with this username
    async fn update(&self, username: &str, changes: UpdateUser) -> AppResult<User>;

    /// Delete user by ID, `NotFound` when nothing was removed
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Remove every user, returning how many were deleted
    async fn delete_all(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository over a document collection
pub struct UserStore {
    collection: Arc<dyn DocumentCollection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: NewUser) -> AppResult<User> {
        let mut document = UserDocument::new(ObjectId::new(), user);

        let inserted = self
            .collection
            .insert_one(bson::to_document(&document)?)
            .await?;
        document.id = inserted
            .as_object_id()
            .ok_or_else(|| AppError::internal(format!("unexpected user identifier {inserted}")))?;

        debug!(user_id = %document.id, username = %document.username, "user saved");
        Ok(User::from(document))
    }

    async fn find_user(&self, id: &str) -> AppResult<User> {
        let document = self
            .collection
            .find_one(filter::by_id(id)?)
            .await?
            .ok_or_not_found(ENTITY)?;

        let document: UserDocument = bson::from_document(document)?;
        Ok(User::from(document))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let Some(document) = self.collection.find_one(filter::by_username(username)).await? else {
            return Ok(None);
        };

        let document: UserDocument = bson::from_document(document)?;
        Ok(Some(User::from(document)))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let documents = self.collection.find(filter::everything()).await?;

        documents
            .into_iter()
            .map(|d| {
                bson::from_document::<UserDocument>(d)
                    .map(User::from)
                    .map_err(AppError::from)
            })
            .collect()
    }

    async fn update(&self, username: &str, changes: UpdateUser) -> AppResult<User> {
        let existing = self
            .collection
            .find_one(filter::by_username(username))
            .await?
            .ok_or_else(|| {
                warn!(%username, "update matched no user");
                AppError::not_found(ENTITY)
            })?;
        let existing: UserDocument = bson::from_document(existing)?;

        let replacement = UserDocument::replaced(existing.id, changes);
        let matched = self
            .collection
            .replace_one(
                filter::by_object_id(existing.id),
                bson::to_document(&replacement)?,
            )
            .await?;

        // Removed between lookup and replace
        if matched == 0 {
            warn!(%username, "user disappeared before update");
            return Err(AppError::not_found(ENTITY));
        }

        debug!(user_id = %replacement.id, "user updated");
        Ok(User::from(replacement))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let deleted = self.collection.delete_one(filter::by_id(id)?).await?;

        if deleted == 0 {
            warn!(user_id = %id, "delete matched no user");
            return Err(AppError::not_found(ENTITY));
        }

        debug!(user_id = %id, "user deleted");
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let deleted = self.collection.delete_many(filter::everything()).await?;
        info!(deleted, "all users removed");
        Ok(deleted)
    }
}
