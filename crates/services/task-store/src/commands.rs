//! Administrative operations behind the `task-store` binary.

use tracing::info;

use common::{AppResult, OptionExt};
use domain::{Task, User};

use crate::repository::{TaskRepository, UserRepository};

/// Tasks the named user is allowed to see.
pub async fn visible_tasks(
    users: &dyn UserRepository,
    tasks: &dyn TaskRepository,
    username: &str,
) -> AppResult<Vec<Task>> {
    let user = users
        .find_by_username(username)
        .await?
        .ok_or_not_found("user")?;

    tasks.find_all(&user).await
}

pub async fn list_users(users: &dyn UserRepository) -> AppResult<Vec<User>> {
    users.find_all().await
}

/// Remove every user. Tasks are left in place.
pub async fn reset_users(users: &dyn UserRepository) -> AppResult<u64> {
    let removed = users.delete_all().await?;
    info!(removed, "User collection reset");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::repository::{MockTaskRepository, MockUserRepository};
    use common::AppError;
    use domain::{TaskStatus, UserRole};

    fn alice() -> User {
        User {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            username: "alice".to_string(),
            password: "secret".to_string(),
            role: UserRole::User,
        }
    }

    #[tokio::test]
    async fn test_visible_tasks_resolves_user() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .withf(|username: &str| username == "alice")
            .times(1)
            .returning(|_| Ok(Some(alice())));

        let mut tasks = MockTaskRepository::new();
        tasks
            .expect_find_all()
            .withf(|user: &User| user.id == "65a1f0c2e4b0a1b2c3d4e5f6")
            .times(1)
            .returning(|user| {
                Ok(vec![Task {
                    id: "65a1f0c2e4b0a1b2c3d4e5f7".to_string(),
                    user_id: user.id.clone(),
                    title: "Buy milk".to_string(),
                    description: String::new(),
                    due_date: Utc::now(),
                    status: TaskStatus::Pending,
                }])
            });

        let result = visible_tasks(&users, &tasks, "alice").await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].user_id, "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[tokio::test]
    async fn test_visible_tasks_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));

        let mut tasks = MockTaskRepository::new();
        tasks.expect_find_all().never();

        let result = visible_tasks(&users, &tasks, "nobody").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_reset_users_reports_count() {
        let mut users = MockUserRepository::new();
        users.expect_delete_all().times(1).returning(|| Ok(4));

        assert_eq!(reset_users(&users).await.unwrap(), 4);
    }
}
