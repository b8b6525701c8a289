//! Setup for the main application.
//!
//! The application setup has only two main stages:
//!
//! 1. Setup the domain layer: the [`Registry`](crate::core::Registry).
//! 2. Launch the application services as concurrent jobs.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
