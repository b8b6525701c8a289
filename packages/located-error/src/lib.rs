//! Error decorator that records where an error was raised.
//!
//! Store drivers and configuration loaders wrap third-party errors (`r2d2`,
//! `mysql`, `rusqlite`, `figment`) into a [`LocatedError`] so that operator
//! logs show the call site that produced the failure, while the client only
//! ever receives a generic message.
//!
//! ```rust
//! use evidence_tracker_located_error::{Located, LocatedError};
//!
//! #[derive(thiserror::Error, Debug)]
//! enum StoreError {
//!     #[error("connection refused")]
//!     Refused,
//! }
//!
//! let located: LocatedError<'_, StoreError> = Located(StoreError::Refused).into();
//!
//! assert!(located.to_string().starts_with("connection refused, "));
//! ```
use std::error::Error;
use std::panic::Location;
use std::sync::Arc;

/// A shareable, type-erased error.
pub type DynError = Arc<dyn std::error::Error + Send + Sync>;

/// Wrapper used to convert any error into a [`LocatedError`] at the caller
/// location.
pub struct Located<E>(pub E);

/// An error paired with the source location where it was captured.
#[derive(Debug)]
pub struct LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    source: Arc<E>,
    location: Box<Location<'a>>,
}

impl<'a, E> LocatedError<'a, E>
where
    E: Error + ?Sized + Send + Sync,
{
    /// The place in the code where the error was captured.
    #[must_use]
    pub fn location(&self) -> &Location<'a> {
        &self.location
    }
}

impl<E> std::fmt::Display for LocatedError<'_, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.source, self.location)
    }
}

impl<E> Error for LocatedError<'_, E>
where
    E: Error + ?Sized + Send + Sync + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl<E> Clone for LocatedError<'_, E>
where
    E: Error + ?Sized + Send + Sync,
{
    fn clone(&self) -> Self {
        LocatedError {
            source: self.source.clone(),
            location: self.location.clone(),
        }
    }
}

#[allow(clippy::from_over_into)]
impl<'a, E> Into<LocatedError<'a, E>> for Located<E>
where
    E: Error + Send + Sync,
{
    #[track_caller]
    fn into(self) -> LocatedError<'a, E> {
        let located = LocatedError {
            source: Arc::new(self.0),
            location: Box::new(*Location::caller()),
        };
        tracing::debug!("{located}");
        located
    }
}

#[allow(clippy::from_over_into)]
impl<'a> Into<LocatedError<'a, dyn std::error::Error + Send + Sync>> for DynError {
    #[track_caller]
    fn into(self) -> LocatedError<'a, dyn std::error::Error + Send + Sync> {
        LocatedError {
            source: self,
            location: Box::new(*Location::caller()),
        }
    }
}
