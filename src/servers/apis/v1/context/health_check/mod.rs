//! API health check endpoint.
//!
//! It is used to check the API is running and the store answers.
//!
//! # Health Check
//!
//! `GET /api/health`
//!
//! It connects the store if it was not connected yet and counts the rows
//! of the cases table.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:3001/api/health"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "status": "ok",
//!     "db": true
//! }
//! ```
//!
//! **Example response** `500`
//!
//! ```json
//! {
//!     "status": "error",
//!     "message": "La base de datos no responde"
//! }
//! ```
//!
//! **Resource**
//!
//! Refer to the API [`Report`](crate::servers::apis::v1::context::health_check::resources::Report)
//! resource for more information about the response attributes.
pub mod handlers;
pub mod resources;
pub mod routes;
