//! Authentication and authorization.
//!
//! - [`password`]: bcrypt hashing and verification of user passwords.
//! - [`session`]: signed, expiring session tokens (HS256 JWT).
//! - [`permissions`]: which roles may perform each protected action.
//!
//! Users are provisioned by operators with the `user_admin` console. The API
//! only reads them to verify credentials.
pub mod password;
pub mod permissions;
pub mod session;

use evidence_tracker_primitives::{Role, UserId};

/// A user as stored, including the password hash.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}

/// Data needed to provision a new user.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    /// bcrypt hash. See [`password::hash`].
    pub password_hash: String,
}
