//! User document as stored in the user collection.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use domain::{is_valid_role, NewUser, UpdateUser, User, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub password: String,
    pub role: String,
}

impl UserDocument {
    pub fn new(id: ObjectId, user: NewUser) -> Self {
        Self {
            id,
            username: user.username,
            password: user.password,
            role: user.role.to_string(),
        }
    }

    /// Replacement document for an existing user
    pub fn replaced(id: ObjectId, changes: UpdateUser) -> Self {
        Self {
            id,
            username: changes.username,
            password: changes.password,
            role: changes.role.to_string(),
        }
    }
}

/// Convert stored document to domain entity.
/// Unrecognised roles degrade to the least privileged one.
impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        if !is_valid_role(&document.role) {
            tracing::warn!(user_id = %document.id, role = %document.role, "unknown stored role");
        }

        User {
            id: document.id.to_hex(),
            username: document.username,
            password: document.password,
            role: UserRole::from(document.role.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(role: &str) -> UserDocument {
        UserDocument {
            id: ObjectId::new(),
            username: "carol".to_string(),
            password: "pw".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_known_roles_map_directly() {
        assert_eq!(User::from(document("admin")).role, UserRole::Admin);
        assert_eq!(User::from(document("user")).role, UserRole::User);
    }

    #[test]
    fn test_unknown_role_is_least_privileged() {
        let user = User::from(document("superuser"));
        assert_eq!(user.role, UserRole::User);
        assert!(!user.is_admin());
    }
}
