//! API handlers for the [`case`](crate::servers::apis::v1::context::case) API context.
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use axum_extra::extract::Query;
use evidence_tracker_primitives::CaseId;

use super::forms::{CaseFilterParams, ChangeStatusForm, CreateCaseForm};
use super::responses::{case_created_response, case_list_response, case_response, status_changed_response};
use crate::core::auth::permissions::Action;
use crate::core::services::case::{change_status, create_case, get_case, list_cases, parse_filter};
use crate::core::Registry;
use crate::servers::apis::v1::middlewares::auth::{authorize, Authenticated};
use crate::servers::apis::v1::responses::{invalid_case_id_param_response, service_error_response};
use crate::servers::apis::{json_body_or_default, CaseIdParam};

/// It handles the request to register a new case.
///
/// It returns:
///
/// - `200` with the id of the new case.
/// - `400` if the case number is missing or blank.
/// - `500` if the store fails, for example on a duplicated case number.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::case#create-a-case)
/// for more information about this endpoint.
pub async fn create_case_handler(
    State(registry): State<Arc<Registry>>,
    Authenticated(user): Authenticated,
    form: Result<Json<CreateCaseForm>, JsonRejection>,
) -> Response {
    if let Err(response) = authorize(&user, Action::CreateCase) {
        return response;
    }

    let form = json_body_or_default(form);

    match create_case(&registry, form.numero_expediente.as_deref(), &user).await {
        Ok(case_id) => case_created_response(case_id),
        Err(err) => service_error_response(&err),
    }
}

/// It handles the request to list cases, optionally filtered by registration
/// date and status.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::case#list-cases)
/// for more information about this endpoint.
pub async fn list_cases_handler(
    State(registry): State<Arc<Registry>>,
    Authenticated(user): Authenticated,
    Query(params): Query<CaseFilterParams>,
) -> Response {
    if let Err(response) = authorize(&user, Action::ListCases) {
        return response;
    }

    let filter = match parse_filter(
        params.fecha_inicio.as_deref(),
        params.fecha_fin.as_deref(),
        params.estado.as_deref(),
    ) {
        Ok(filter) => filter,
        Err(err) => return service_error_response(&err),
    };

    match list_cases(&registry, filter).await {
        Ok(cases) => case_list_response(cases),
        Err(err) => service_error_response(&err),
    }
}

/// It handles the request to get one case.
///
/// It returns `404` if there is no case with the given id.
pub async fn get_case_handler(
    State(registry): State<Arc<Registry>>,
    Authenticated(user): Authenticated,
    Path(case_id): Path<CaseIdParam>,
) -> Response {
    if let Err(response) = authorize(&user, Action::GetCase) {
        return response;
    }

    match CaseId::from_str(&case_id.0) {
        Err(_) => invalid_case_id_param_response(&case_id.0),
        Ok(case_id) => match get_case(&registry, case_id).await {
            Ok(case) => case_response(case),
            Err(err) => service_error_response(&err),
        },
    }
}

/// It handles the review decision of a coordinator.
///
/// It returns:
///
/// - `200` if the status was changed.
/// - `400` if the new status is missing or unknown.
/// - `403` if the caller is not a coordinator.
/// - `404` if the case does not exist.
/// - `409` if the case cannot go from its current status to the new one.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::case#change-the-status-of-a-case)
/// for more information about this endpoint.
pub async fn change_status_handler(
    State(registry): State<Arc<Registry>>,
    Authenticated(user): Authenticated,
    Path(case_id): Path<CaseIdParam>,
    form: Result<Json<ChangeStatusForm>, JsonRejection>,
) -> Response {
    if let Err(response) = authorize(&user, Action::ChangeCaseStatus) {
        return response;
    }

    let Ok(case_id) = CaseId::from_str(&case_id.0) else {
        return invalid_case_id_param_response(&case_id.0);
    };

    let form = json_body_or_default(form);

    match change_status(&registry, case_id, form.nuevo_estado.as_deref(), form.justificacion, &user).await {
        Ok(()) => status_changed_response(),
        Err(err) => service_error_response(&err),
    }
}
