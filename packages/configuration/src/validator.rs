//! Trait to validate semantic errors.
//!
//! Every option can have a valid value on its own and still produce a
//! configuration the application cannot run with.
use thiserror::Error;

/// Errors that can occur validating the configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SemanticValidationError {
    #[error("The session secret must not be empty. Set `core.session.secret`.")]
    EmptySessionSecret,

    #[error("The session lifetime must be greater than zero seconds.")]
    ZeroSessionLifetime,

    #[error("The store call timeout must be greater than zero seconds.")]
    ZeroStoreTimeout,

    #[error("The database path must not be empty.")]
    EmptyDatabasePath,
}

pub trait Validator {
    /// # Errors
    ///
    /// Will return an error if the configuration is invalid.
    fn validate(&self) -> Result<(), SemanticValidationError>;
}
