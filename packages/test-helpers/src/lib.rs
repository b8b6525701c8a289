//! Testing helpers for the evidence tracker.
pub mod configuration;
pub mod random;
