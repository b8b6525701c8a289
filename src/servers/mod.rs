//! Servers. The delivery layer on top of the [`core`](crate::core).
pub mod apis;
pub mod signals;
