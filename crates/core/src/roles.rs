//! Role names used in JWT claims and RBAC checks.

/// Full access, including hard deletes and user management.
pub const ROLE_ADMIN: &str = "admin";

/// Front-desk staff: manages orders, customers, bookings, and content.
pub const ROLE_RECEPTIONIST: &str = "receptionist";

/// Repair staff: reads orders and appends internal notes.
pub const ROLE_TECHNICIAN: &str = "technician";

/// All roles accepted when creating a user.
pub const ALL_ROLES: [&str; 3] = [ROLE_ADMIN, ROLE_RECEPTIONIST, ROLE_TECHNICIAN];

/// Whether a role may manage orders, customers, and site content.
pub fn is_staff(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_RECEPTIONIST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_receptionist_are_staff() {
        assert!(is_staff(ROLE_ADMIN));
        assert!(is_staff(ROLE_RECEPTIONIST));
    }

    #[test]
    fn technician_is_not_staff() {
        assert!(!is_staff(ROLE_TECHNICIAN));
        assert!(!is_staff("visitor"));
    }
}
