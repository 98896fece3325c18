//! Domain-level constants.
//!
//! These constants define the closed value sets stored alongside entities.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role, sees every task regardless of owner
pub const ROLE_ADMIN: &str = "admin";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Task Status
// =============================================================================

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";

// =============================================================================
// Identifiers
// =============================================================================

/// Length of an identifier rendered at the boundary (12 bytes as hex)
pub const OBJECT_ID_HEX_LEN: usize = 24;

/// Check that an identifier has the fixed hexadecimal format
pub fn is_valid_object_id_hex(id: &str) -> bool {
    id.len() == OBJECT_ID_HEX_LEN && id.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_roles() {
        assert!(is_valid_role("admin"));
        assert!(is_valid_role("user"));
        assert!(!is_valid_role("root"));
    }

    #[test]
    fn test_object_id_hex_format() {
        assert!(is_valid_object_id_hex("65a1f0c2e4b0a1b2c3d4e5f6"));
        assert!(is_valid_object_id_hex("65A1F0C2E4B0A1B2C3D4E5F6"));
        assert!(!is_valid_object_id_hex(""));
        assert!(!is_valid_object_id_hex("65a1f0c2e4b0a1b2c3d4e5f"));
        assert!(!is_valid_object_id_hex("65a1f0c2e4b0a1b2c3d4e5fz"));
    }
}
