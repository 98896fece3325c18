//! User repository behaviour against the in-memory collection.

use std::sync::Arc;

use common::AppError;
use domain::{NewUser, UpdateUser, UserRole};
use task_store_lib::collection::InMemoryCollection;
use task_store_lib::{UserRepository, UserStore};

fn repo() -> (Arc<InMemoryCollection>, UserStore) {
    let collection = Arc::new(InMemoryCollection::new());
    let store = UserStore::new(collection.clone());
    (collection, store)
}

#[tokio::test]
async fn test_save_then_find_round_trip() {
    let (_, users) = repo();
    let input = NewUser::new("alice", "opaque-credential", UserRole::Admin);

    let saved = users.save(input.clone()).await.unwrap();
    let fetched = users.find_user(&saved.id).await.unwrap();

    assert!(!saved.id.is_empty());
    assert_eq!(fetched, input.into_user(saved.id.clone()));
    // Credential is stored as given
    assert_eq!(fetched.password, "opaque-credential");
}

#[tokio::test]
async fn test_find_user_never_saved_is_not_found() {
    let (_, users) = repo();

    let result = users.find_user("65a1f0c2e4b0a1b2c3d4e5f6").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_find_by_username() {
    let (_, users) = repo();
    let saved = users
        .save(NewUser::new("bob", "pw", UserRole::User))
        .await
        .unwrap();

    assert_eq!(users.find_by_username("bob").await.unwrap(), Some(saved));
    assert_eq!(users.find_by_username("carol").await.unwrap(), None);
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_id() {
    let (collection, users) = repo();
    let saved = users
        .save(NewUser::new("bob", "pw", UserRole::User))
        .await
        .unwrap();

    let changes = UpdateUser {
        username: "robert".to_string(),
        password: "new-pw".to_string(),
        role: UserRole::Admin,
    };
    let updated = users.update("bob", changes).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.username, "robert");
    assert!(updated.is_admin());
    assert_eq!(users.find_user(&saved.id).await.unwrap(), updated);
    assert!(users.find_by_username("bob").await.unwrap().is_none());
    assert_eq!(collection.len().await, 1);
}

#[tokio::test]
async fn test_update_missing_username_creates_nothing() {
    let (collection, users) = repo();

    let changes = UpdateUser {
        username: "ghost".to_string(),
        password: "pw".to_string(),
        role: UserRole::User,
    };
    let result = users.update("ghost", changes).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(collection.is_empty().await);
    assert!(users.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_and_delete_all() {
    let (_, users) = repo();
    let a = users.save(NewUser::new("a", "pw", UserRole::User)).await.unwrap();
    users.save(NewUser::new("b", "pw", UserRole::User)).await.unwrap();
    users.save(NewUser::new("c", "pw", UserRole::Admin)).await.unwrap();

    users.delete(&a.id).await.unwrap();
    assert!(matches!(users.find_user(&a.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(users.delete(&a.id).await, Err(AppError::NotFound(_))));
    assert_eq!(users.find_all().await.unwrap().len(), 2);

    assert_eq!(users.delete_all().await.unwrap(), 2);
    assert!(users.find_all().await.unwrap().is_empty());
    assert_eq!(users.delete_all().await.unwrap(), 0);
}

#[tokio::test]
async fn test_malformed_identifier_is_validation_error() {
    let (_, users) = repo();

    assert!(matches!(users.find_user("xyz").await, Err(AppError::Validation(_))));
    assert!(matches!(users.delete("xyz").await, Err(AppError::Validation(_))));
}
