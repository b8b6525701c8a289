//! API responses for the [`case`](crate::servers::apis::v1::context::case) API context.
use axum::response::{IntoResponse, Response};
use axum::Json;
use evidence_tracker_primitives::CaseId;

use super::resources::{Case, CaseCreated};
use crate::core::cases;
use crate::servers::apis::v1::responses::ok_message_response;

/// `200` response with the id of the new case.
#[must_use]
pub fn case_created_response(case_id: CaseId) -> Response {
    Json(CaseCreated {
        message: "Expediente creado".to_string(),
        id_expediente: case_id.0,
    })
    .into_response()
}

/// `200` response with a json array of [`Case`] resources.
#[must_use]
pub fn case_list_response(cases: Vec<cases::Case>) -> Response {
    Json(cases.into_iter().map(Case::from).collect::<Vec<Case>>()).into_response()
}

/// `200` response with a json [`Case`] resource.
#[must_use]
pub fn case_response(case: cases::Case) -> Response {
    Json(Case::from(case)).into_response()
}

#[must_use]
pub fn status_changed_response() -> Response {
    ok_message_response("Estado actualizado correctamente")
}
