//! Common responses for the API v1 shared by all the contexts.
//!
//! Every response body is JSON. Errors are always a [`Message`] with the
//! text shown to the end user.
use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use evidence_tracker_primitives::CaseStatus;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::core::error::Error;

/// The body of every error response and of the success responses that only
/// carry a confirmation.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

/// Response with the given status and a [`Message`] body.
#[must_use]
pub fn message_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(Message {
            message: message.to_owned(),
        }),
    )
        .into_response()
}

// OK responses

/// `200` response with a confirmation message.
#[must_use]
pub fn ok_message_response(message: &str) -> Response {
    message_response(StatusCode::OK, message)
}

// Error responses

#[must_use]
pub fn bad_request_response(message: &str) -> Response {
    message_response(StatusCode::BAD_REQUEST, message)
}

#[must_use]
pub fn invalid_case_id_param_response(case_id: &str) -> Response {
    debug!(target: "API", "invalid case id param: {case_id:?}");
    bad_request_response("ID de expediente inválido")
}

#[must_use]
pub fn invalid_evidence_id_param_response(evidence_id: &str) -> Response {
    debug!(target: "API", "invalid evidence id param: {evidence_id:?}");
    bad_request_response("ID de indicio inválido")
}

#[must_use]
pub fn invalid_status_response() -> Response {
    bad_request_response(&format!("Estado inválido. Use uno de: {}", CaseStatus::valid_values()))
}

#[must_use]
pub fn invalid_date_response(value: &str) -> Response {
    bad_request_response(&format!(
        "Fecha inválida: \"{value}\". Use el formato YYYY-MM-DD o YYYY-MM-DDTHH:MM:SS"
    ))
}

/// `401` response. Used for bad credentials and for missing or invalid
/// session tokens.
#[must_use]
pub fn unauthorized_response(message: &str) -> Response {
    message_response(StatusCode::UNAUTHORIZED, message)
}

/// `403` response when the role of the caller is not allowed to perform the
/// operation.
#[must_use]
pub fn forbidden_response() -> Response {
    message_response(StatusCode::FORBIDDEN, "No tiene permisos para esta acción")
}

#[must_use]
pub fn not_found_response(message: &str) -> Response {
    message_response(StatusCode::NOT_FOUND, message)
}

/// `500` response. It never carries the cause of the failure.
#[must_use]
pub fn internal_server_error_response() -> Response {
    message_response(StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor")
}

/// `503` response when the store did not answer in time. Clients may retry
/// after the store timeout.
#[must_use]
pub fn service_unavailable_response(retry_after: Duration) -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        [(header::RETRY_AFTER, retry_after.as_secs().max(1).to_string())],
        Json(Message {
            message: "Servicio no disponible temporalmente, intente de nuevo".to_owned(),
        }),
    )
        .into_response()
}

/// Maps a core service error to its response.
///
/// Store failures are logged here, with their source location, and answered
/// with a generic message.
#[must_use]
pub fn service_error_response(err: &Error) -> Response {
    match err {
        Error::MissingCredentials { .. } => bad_request_response("Email y contraseña son requeridos"),
        Error::MissingCaseNumber { .. } => bad_request_response("El número de expediente es requerido"),
        Error::MissingEvidenceDescription { .. } => bad_request_response("La descripción es requerida"),
        Error::InvalidStatus { .. } => invalid_status_response(),
        Error::InvalidDate { source, .. } => invalid_date_response(&source.value),
        Error::InvalidCredentials { .. } => unauthorized_response("Credenciales inválidas"),
        Error::CaseNotFound { .. } => not_found_response("Expediente no encontrado"),
        Error::EvidenceNotFound { .. } => not_found_response("Indicio no encontrado"),
        Error::IllegalTransition { from, to, .. } => message_response(
            StatusCode::CONFLICT,
            &format!("Transición de estado no permitida: de {from} a {to}"),
        ),
        Error::Upstream { .. } => {
            error!(target: "API", "{err}");
            internal_server_error_response()
        }
        Error::Timeout { timeout, .. } => {
            error!(target: "API", "{err}");
            service_unavailable_response(*timeout)
        }
    }
}
