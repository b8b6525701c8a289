//! API handlers for the [`evidence`](crate::servers::apis::v1::context::evidence) API context.
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use evidence_tracker_primitives::{CaseId, EvidenceId};

use super::forms::CreateEvidenceForm;
use super::responses::{evidence_created_response, evidence_deleted_response, evidence_list_response, evidence_response};
use crate::core::auth::permissions::Action;
use crate::core::services::evidence::{create_evidence, delete_evidence, get_evidence, get_evidence_in_case, list_evidence};
use crate::core::Registry;
use crate::servers::apis::v1::middlewares::auth::{authorize, Authenticated};
use crate::servers::apis::v1::responses::{
    invalid_case_id_param_response, invalid_evidence_id_param_response, service_error_response,
};
use crate::servers::apis::{json_body_or_default, CaseIdParam, EvidenceIdParam};

/// It handles the request to register an evidence item in a case. The case
/// is taken from the path only.
///
/// It returns:
///
/// - `200` with the id of the new item.
/// - `400` if the description is missing or blank. The store is not called.
/// - `500` if the store fails, for example because the case does not exist.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::evidence#register-an-evidence-item)
/// for more information about this endpoint.
pub async fn create_evidence_handler(
    State(registry): State<Arc<Registry>>,
    Authenticated(user): Authenticated,
    Path(case_id): Path<CaseIdParam>,
    form: Result<Json<CreateEvidenceForm>, JsonRejection>,
) -> Response {
    if let Err(response) = authorize(&user, Action::CreateEvidence) {
        return response;
    }

    let Ok(case_id) = CaseId::from_str(&case_id.0) else {
        return invalid_case_id_param_response(&case_id.0);
    };

    let form = json_body_or_default(form);

    match create_evidence(&registry, case_id, form.into()).await {
        Ok(evidence_id) => evidence_created_response(evidence_id),
        Err(err) => service_error_response(&err),
    }
}

/// It handles the request to list the evidence items of a case.
pub async fn list_evidence_handler(
    State(registry): State<Arc<Registry>>,
    Authenticated(user): Authenticated,
    Path(case_id): Path<CaseIdParam>,
) -> Response {
    if let Err(response) = authorize(&user, Action::ListEvidence) {
        return response;
    }

    match CaseId::from_str(&case_id.0) {
        Err(_) => invalid_case_id_param_response(&case_id.0),
        Ok(case_id) => match list_evidence(&registry, case_id).await {
            Ok(items) => evidence_list_response(items),
            Err(err) => service_error_response(&err),
        },
    }
}

/// It handles the request to get an evidence item by its id.
pub async fn get_evidence_handler(
    State(registry): State<Arc<Registry>>,
    Authenticated(user): Authenticated,
    Path(evidence_id): Path<EvidenceIdParam>,
) -> Response {
    if let Err(response) = authorize(&user, Action::GetEvidence) {
        return response;
    }

    match EvidenceId::from_str(&evidence_id.0) {
        Err(_) => invalid_evidence_id_param_response(&evidence_id.0),
        Ok(evidence_id) => match get_evidence(&registry, evidence_id).await {
            Ok(item) => evidence_response(item),
            Err(err) => service_error_response(&err),
        },
    }
}

/// It handles the request to get an evidence item within a case.
///
/// It returns `404` if the item does not exist or belongs to another case.
pub async fn get_evidence_in_case_handler(
    State(registry): State<Arc<Registry>>,
    Authenticated(user): Authenticated,
    Path((case_id, evidence_id)): Path<(String, String)>,
) -> Response {
    if let Err(response) = authorize(&user, Action::GetEvidence) {
        return response;
    }

    let Ok(case_id) = CaseId::from_str(&case_id) else {
        return invalid_case_id_param_response(&case_id);
    };

    let Ok(evidence_id) = EvidenceId::from_str(&evidence_id) else {
        return invalid_evidence_id_param_response(&evidence_id);
    };

    match get_evidence_in_case(&registry, case_id, evidence_id).await {
        Ok(item) => evidence_response(item),
        Err(err) => service_error_response(&err),
    }
}

/// It handles the request to delete an evidence item. Coordinators only.
///
/// Deleting an item that does not exist also answers `200`.
pub async fn delete_evidence_handler(
    State(registry): State<Arc<Registry>>,
    Authenticated(user): Authenticated,
    Path(evidence_id): Path<EvidenceIdParam>,
) -> Response {
    if let Err(response) = authorize(&user, Action::DeleteEvidence) {
        return response;
    }

    match EvidenceId::from_str(&evidence_id.0) {
        Err(_) => invalid_evidence_id_param_response(&evidence_id.0),
        Ok(evidence_id) => match delete_evidence(&registry, evidence_id).await {
            Ok(()) => evidence_deleted_response(),
            Err(err) => service_error_response(&err),
        },
    }
}
