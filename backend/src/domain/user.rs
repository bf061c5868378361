//! User records crossing the handler/store seam.

use crate::domain::RecordId;

/// Payload persisted on registration.
///
/// The password travels and persists exactly as given; no hashing or
/// normalisation is applied anywhere in this service. See DESIGN.md.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Login name. Expected unique, never enforced.
    pub username: String,
    /// Stored verbatim.
    pub password: String,
    /// Contact address. No format check.
    pub email: String,
}

/// Login credentials matched against stored users by direct equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// The viewable slice of a stored user.
///
/// There is deliberately no password field on this type, so the password
/// cannot reach a response body regardless of how an adapter fetches the
/// underlying document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: RecordId,
    pub username: String,
    pub email: String,
}
