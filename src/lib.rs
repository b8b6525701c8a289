//! **Evidence Tracker** is a records-management service for a forensic
//! laboratory.
//!
//! Technicians register case files ("expedientes") and the evidence items
//! ("indicios") collected for them. Coordinators review the cases, approving
//! or rejecting them, and read aggregated reports. Everything is exposed
//! through a JSON REST API protected by session tokens.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Services](#services)
//! - [Installation](#installation)
//!     - [Configuration](#configuration)
//!     - [Run with cargo](#run-with-cargo)
//! - [Users](#users)
//! - [Components](#components)
//!
//! # Features
//!
//! - Login with email and password. Passwords are stored as bcrypt hashes.
//! - HS256 session tokens with a configurable lifetime (8 hours by default).
//! - Two roles, `tecnico` and `coordinador`, with a fixed permission table.
//! - Case review state machine: `pendiente` to `aprobado` or `rechazado`,
//!   and back to `pendiente`.
//! - Case summary and detail reports filtered by registration date.
//! - Two store drivers: `MySQL`, through stored procedures, and `SQLite3`.
//!
//! # Services
//!
//! The application runs one service: the [REST API](crate::servers::apis).
//! The store is connected lazily, on the first request that needs it, and
//! every store call is bounded by a timeout.
//!
//! # Installation
//!
//! ## Configuration
//!
//! The configuration is a TOML file. The default one is
//! `./share/default/config/evidence-tracker.development.sqlite3.toml`. It
//! can be replaced with the `EVIDENCE_TRACKER_CONFIG_TOML_PATH` environment
//! variable, or injected whole with `EVIDENCE_TRACKER_CONFIG_TOML`:
//!
//! ```text
//! EVIDENCE_TRACKER_CONFIG_TOML=$(cat ./evidence-tracker.toml) cargo run
//! ```
//!
//! Single options are overridden with `EVIDENCE_TRACKER_CONFIG_OVERRIDE_`
//! variables. This is the recommended way to inject the session secret:
//!
//! ```text
//! EVIDENCE_TRACKER_CONFIG_OVERRIDE_CORE__SESSION__SECRET=MySecret cargo run
//! ```
//!
//! Refer to the [configuration crate](evidence_tracker_configuration) for
//! all the options.
//!
//! ## Run with cargo
//!
//! ```text
//! mkdir -p ./storage/evidence-tracker/lib/database
//! cargo run
//! ```
//!
//! The API listens on `http://0.0.0.0:3001` by default:
//!
//! ```text
//! curl http://127.0.0.1:3001/api/health
//! ```
//!
//! # Users
//!
//! The API does not expose user management. Users are provisioned with the
//! `user_admin` console:
//!
//! ```text
//! cargo run --bin user_admin -- create \
//!     --name "Ana Pérez" --email ana@example.com --role tecnico --password secret
//! ```
//!
//! # Components
//!
//! ```text
//! Delivery layer     Domain layer       Persistence
//!
//!   REST API       |> Core services  |> Store |> MySQL / SQLite3
//!   User console   |
//! ```
//!
//! - [`servers`]: the REST API and the server lifecycle.
//! - [`core`]: the business operations, authentication and the store.
//! - [`bootstrap`]: configuration loading, logging and jobs.
//! - [`console`]: the operator console.
pub mod app;
pub mod bootstrap;
pub mod console;
pub mod core;
pub mod servers;
