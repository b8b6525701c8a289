//! Application jobs launchers.
//!
//! Each job is a concurrent task the main application waits for on shutdown.
//! There is only one: the [HTTP API](crate::bootstrap::jobs::http_api).
pub mod http_api;
