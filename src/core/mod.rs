//! The core module contains the records-management logic, independent of the
//! delivery layer.
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!   HTTP API       |> Services |> Store |> External store
//!   User console   |
//! ```
//!
//! # Table of contents
//!
//! - [Registry](#registry)
//! - [Services](#services)
//! - [Authentication](#authentication)
//! - [Persistence](#persistence)
//!
//! # Registry
//!
//! The [`Registry`] is the main struct in this module. It owns the two
//! process-wide resources: the [`Store`](store::Store) handle and the
//! [`SessionCodec`](auth::session::SessionCodec). It is shared behind an
//! `Arc` with every request handler.
//!
//! # Services
//!
//! The [`services`] module contains one function per business operation.
//! Services validate the input, call the store once (twice for review
//! decisions, which first load the case) and return domain values or an
//! [`Error`](error::Error).
//!
//! # Authentication
//!
//! See [`auth`].
//!
//! # Persistence
//!
//! See [`databases`].
pub mod auth;
pub mod cases;
pub mod databases;
pub mod error;
pub mod evidence;
pub mod period;
pub mod reports;
pub mod services;
pub mod store;

use evidence_tracker_configuration::Core;

use self::auth::session::SessionCodec;
use self::store::Store;

/// Process-wide resources shared by all the services.
pub struct Registry {
    pub store: Store,
    pub sessions: SessionCodec,
}

impl Registry {
    /// Builds the registry from the core configuration. The store connects
    /// lazily, on the first call.
    #[must_use]
    pub fn new(config: &Core) -> Registry {
        Registry {
            store: Store::new(&config.database),
            sessions: SessionCodec::new(&config.session.secret, config.session.lifetime()),
        }
    }
}

/// Returns the value as sent if it has any non-whitespace character.
///
/// Whitespace is only looked at to tell blank values apart. Stored values
/// keep it.
#[must_use]
pub fn non_blank<S: AsRef<str>>(value: Option<S>) -> Option<S> {
    value.filter(|value| !value.as_ref().trim().is_empty())
}
