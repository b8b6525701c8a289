//! Operator console to provision users.
//!
//! The REST API does not expose user management. Operators create the users
//! with this console, which writes them to the configured store.
pub mod app;
