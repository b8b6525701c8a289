//! API responses for the [`evidence`](crate::servers::apis::v1::context::evidence) API context.
use axum::response::{IntoResponse, Response};
use axum::Json;
use evidence_tracker_primitives::EvidenceId;

use super::resources::{Evidence, EvidenceCreated};
use crate::core::evidence;
use crate::servers::apis::v1::responses::ok_message_response;

#[must_use]
pub fn evidence_created_response(evidence_id: EvidenceId) -> Response {
    Json(EvidenceCreated {
        message: "Indicio creado correctamente".to_string(),
        id_indicio: evidence_id.0,
    })
    .into_response()
}

/// `200` response with a json array of [`Evidence`] resources.
#[must_use]
pub fn evidence_list_response(items: Vec<evidence::Evidence>) -> Response {
    Json(items.into_iter().map(Evidence::from).collect::<Vec<Evidence>>()).into_response()
}

#[must_use]
pub fn evidence_response(item: evidence::Evidence) -> Response {
    Json(Evidence::from(item)).into_response()
}

#[must_use]
pub fn evidence_deleted_response() -> Response {
    ok_message_response("Indicio eliminado (si existía)")
}
