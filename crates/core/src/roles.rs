//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in the initial
//! migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_RESTAURANT_OWNER: &str = "restaurant_owner";
pub const ROLE_CUSTOMER: &str = "customer";

/// Whether `role` is one of the three known role names.
pub fn is_valid_role(role: &str) -> bool {
    matches!(role, ROLE_ADMIN | ROLE_RESTAURANT_OWNER | ROLE_CUSTOMER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        assert!(is_valid_role(ROLE_ADMIN));
        assert!(is_valid_role(ROLE_RESTAURANT_OWNER));
        assert!(is_valid_role(ROLE_CUSTOMER));
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(!is_valid_role("superuser"));
        assert!(!is_valid_role(""));
    }
}
