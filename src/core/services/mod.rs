//! Core services. One function per business operation.
//!
//! Service | Operations
//! ---|---
//! [`authentication`] | login
//! [`case`] | create, list, get, change status
//! [`evidence`] | create, list by case, get, get within a case, delete
//! [`report`] | summary by status, detail listing
//! [`health`] | store liveness
pub mod authentication;
pub mod case;
pub mod evidence;
pub mod health;
pub mod report;
