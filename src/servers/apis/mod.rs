//! The evidence tracker REST API.
//!
//! It is the only delivery surface of the application. Technicians register
//! cases ("expedientes") and the evidence items ("indicios") found in them.
//! Coordinators review the cases and read the reports.
//!
//! # Table of contents
//!
//! - [Configuration](#configuration)
//! - [Authentication](#authentication)
//! - [Endpoints](#endpoints)
//! - [Errors](#errors)
//! - [Versioning](#versioning)
//!
//! # Configuration
//!
//! ```toml
//! [http_api]
//! bind_address = "0.0.0.0:3001"
//! ```
//!
//! Refer to the [configuration crate](evidence_tracker_configuration) for
//! the rest of the options.
//!
//! # Authentication
//!
//! `POST /api/auth/login` exchanges an email and a password for a session
//! token. Every other route, except the health check, requires the token in
//! the `Authorization` header:
//!
//! ```text
//! Authorization: Bearer <token>
//! ```
//!
//! Missing, malformed, invalid and expired tokens are rejected with `401`.
//! A valid token whose role is not allowed to perform the operation is
//! rejected with `403`. See [`permissions`](crate::core::auth::permissions).
//!
//! # Endpoints
//!
//! Method | Path | Roles
//! ---|---|---
//! `POST` | `/api/auth/login` | public
//! `GET` | `/api/health` | public
//! `GET` | `/api/protegido` | any
//! `POST` | `/api/expedientes` | any
//! `GET` | `/api/expedientes` | any
//! `GET` | `/api/expedientes/:id` | any
//! `PUT` | `/api/expedientes/:id/estado` | `coordinador`
//! `POST` | `/api/expedientes/:id/indicios` | any
//! `GET` | `/api/expedientes/:id/indicios` | any
//! `GET` | `/api/expedientes/:id/indicios/:id_indicio` | any
//! `GET` | `/api/indicios/:id` | any
//! `DELETE` | `/api/indicios/:id` | `coordinador`
//! `GET` | `/api/reportes/expedientes-resumen` | `coordinador`
//! `GET` | `/api/reportes/expedientes-detalle` | `coordinador`
//!
//! Each context documents its own endpoints:
//!
//! - [Authentication](crate::servers::apis::v1::context::auth)
//! - [Cases](crate::servers::apis::v1::context::case)
//! - [Evidence](crate::servers::apis::v1::context::evidence)
//! - [Reports](crate::servers::apis::v1::context::report)
//! - [Health check](crate::servers::apis::v1::context::health_check)
//!
//! # Errors
//!
//! Every error body is a JSON object with a `message` field:
//!
//! ```json
//! { "message": "Expediente no encontrado" }
//! ```
//!
//! Status | Meaning
//! ---|---
//! `400` | Invalid input: a missing field, an unknown status, a bad date or id.
//! `401` | Missing or invalid credentials or session token.
//! `403` | The role is not allowed to perform the operation.
//! `404` | The case or evidence item does not exist.
//! `409` | The review transition is not allowed from the current status.
//! `500` | The store failed. The cause is logged, not returned.
//! `503` | The store did not answer in time. It carries a `Retry-After` header.
//!
//! # Versioning
//!
//! There is only one version of the API. Its paths are not versioned.
pub mod routes;
pub mod server;
pub mod v1;

use std::fmt;
use std::str::FromStr;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{de, Deserialize, Deserializer};
use tracing::debug;

/// The version of the HTTP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// The first and only version.
    V1,
}

/// A container for a case id extracted from the URL path.
///
/// It does not perform any validation, it just stores the value. The
/// handlers parse it so that they can answer with a custom message.
#[derive(Deserialize, Debug)]
pub struct CaseIdParam(pub String);

/// A container for an evidence item id extracted from the URL path.
#[derive(Deserialize, Debug)]
pub struct EvidenceIdParam(pub String);

/// Serde deserialization decorator to map empty Strings to None.
///
/// # Errors
///
/// Will return an error if the value is not a string or it cannot be parsed.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map_err(de::Error::custom).map(Some),
    }
}

/// Unwraps a JSON body, falling back to the empty form when the body is
/// missing, malformed or has wrongly typed fields.
///
/// The empty form is then rejected by the service with the usual "field
/// required" message. The original rejection is logged at debug level.
pub fn json_body_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> T {
    match body {
        Ok(Json(form)) => form,
        Err(rejection) => {
            debug!(target: "API", "unreadable request body, handled as empty: {rejection}");
            T::default()
        }
    }
}
