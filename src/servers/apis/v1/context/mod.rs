//! API is organized in resource groups called contexts.
//!
//! Each context is a module that contains the API endpoints related to a
//! specific resource group.
pub mod auth;
pub mod case;
pub mod evidence;
pub mod health_check;
pub mod report;
