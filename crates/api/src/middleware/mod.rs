//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- extracts the authenticated staff user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.
//! - [`rbac::RequireStaff`] -- requires `admin` or `receptionist`.
//! - [`rbac::RequireAuth`] -- requires any authenticated staff user.

pub mod auth;
pub mod rbac;
