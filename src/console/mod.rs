//! Console apps.
pub mod user_admin;
