//! Filter document builders.

use bson::{doc, oid::ObjectId, Document};

use common::{AppError, AppResult};
use domain::TaskScope;

/// Parse a boundary identifier into its stored form.
pub fn parse_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::validation(format!("invalid identifier '{id}'")))
}

/// `{"_id": <ObjectId>}` for a hex identifier
pub fn by_id(id: &str) -> AppResult<Document> {
    Ok(by_object_id(parse_id(id)?))
}

pub fn by_object_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

pub fn by_username(username: &str) -> Document {
    doc! { "username": username }
}

/// Translate a visibility scope into a task filter
pub fn for_scope(scope: &TaskScope) -> Document {
    match scope {
        TaskScope::All => everything(),
        TaskScope::OwnedBy(owner) => doc! { "user_id": owner.as_str() },
    }
}

pub fn everything() -> Document {
    Document::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id_parses_hex() {
        let id = ObjectId::new();
        let filter = by_id(&id.to_hex()).unwrap();
        assert_eq!(filter, doc! { "_id": id });
    }

    #[test]
    fn test_by_id_rejects_malformed() {
        let err = by_id("not-an-id").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(by_id("").is_err());
    }

    #[test]
    fn test_scope_filters() {
        assert!(for_scope(&TaskScope::All).is_empty());
        assert_eq!(
            for_scope(&TaskScope::OwnedBy("65a1f0c2e4b0a1b2c3d4e5f6".into())),
            doc! { "user_id": "65a1f0c2e4b0a1b2c3d4e5f6" }
        );
    }
}
