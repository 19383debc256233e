//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated caller from a JWT Bearer token.
//! - [`rbac::RequireAdministrator`] -- Requires the `administrator` role.
//! - [`rbac::RequireAuth`] -- Requires any authenticated user.

pub mod auth;
pub mod rbac;
