//! The API version `v1`.
//!
//! The API is organized in the following contexts:
//!
//! Context | Description | Version
//! ---|---|---
//! `Authentication` | Login and session check | [`v1`](crate::servers::apis::v1::context::auth)
//! `Cases` | Cases and their review | [`v1`](crate::servers::apis::v1::context::case)
//! `Evidence` | Evidence items of a case | [`v1`](crate::servers::apis::v1::context::evidence)
//! `Reports` | Coordinator reports | [`v1`](crate::servers::apis::v1::context::report)
//! `Health check` | Liveness of the API and the store | [`v1`](crate::servers::apis::v1::context::health_check)
//!
//! Refer to the [authentication middleware](crate::servers::apis::v1::middlewares::auth)
//! for more information about the authentication process.
pub mod context;
pub mod middlewares;
pub mod responses;
pub mod routes;
