//! User password hashing.
//!
//! Hashes use the bcrypt `$2b$` format with cost [`COST`], compatible with
//! the hashes already present in the store.
use std::sync::OnceLock;

/// bcrypt cost used for new hashes.
pub const COST: u32 = 10;

static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Hashes a password with the default cost.
///
/// # Errors
///
/// Will return `bcrypt::BcryptError` if the password cannot be hashed.
pub fn hash(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash_with_cost(password, COST)
}

/// Hashes a password with the given bcrypt cost (from 4 to 31).
///
/// # Errors
///
/// Will return `bcrypt::BcryptError` if the cost is out of range.
pub fn hash_with_cost(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

/// Checks a password against a stored hash. A malformed hash never matches.
#[must_use]
pub fn verify(password: &str, password_hash: &str) -> bool {
    bcrypt::verify(password, password_hash).unwrap_or(false)
}

/// Runs one verification against a fixed hash and discards the result.
///
/// Used when the login email is unknown so the response takes as long as a
/// failed password check.
pub fn verify_against_dummy_hash(password: &str) {
    let dummy_hash = DUMMY_HASH.get_or_init(|| hash("dummy-password").unwrap_or_default());

    let _ = verify(password, dummy_hash);
}
