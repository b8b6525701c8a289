//! API handlers for the [`report`](crate::servers::apis::v1::context::report) API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum_extra::extract::Query;

use super::forms::PeriodParams;
use super::responses::case_summary_response;
use crate::core::auth::permissions::Action;
use crate::core::services::case::{parse_filter, parse_period};
use crate::core::services::report::{case_detail, case_summary};
use crate::core::Registry;
use crate::servers::apis::v1::context::case::forms::CaseFilterParams;
use crate::servers::apis::v1::context::case::responses::case_list_response;
use crate::servers::apis::v1::middlewares::auth::{authorize, Authenticated};
use crate::servers::apis::v1::responses::service_error_response;

/// It handles the request for the case summary report. Coordinators only.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::report#case-summary)
/// for more information about this endpoint.
pub async fn case_summary_handler(
    State(registry): State<Arc<Registry>>,
    Authenticated(user): Authenticated,
    Query(params): Query<PeriodParams>,
) -> Response {
    if let Err(response) = authorize(&user, Action::CaseSummaryReport) {
        return response;
    }

    let period = match parse_period(params.fecha_inicio.as_deref(), params.fecha_fin.as_deref()) {
        Ok(period) => period,
        Err(err) => return service_error_response(&err),
    };

    match case_summary(&registry, period).await {
        Ok(summary) => case_summary_response(summary),
        Err(err) => service_error_response(&err),
    }
}

/// It handles the request for the case detail report. Coordinators only.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::report#case-detail)
/// for more information about this endpoint.
pub async fn case_detail_handler(
    State(registry): State<Arc<Registry>>,
    Authenticated(user): Authenticated,
    Query(params): Query<CaseFilterParams>,
) -> Response {
    if let Err(response) = authorize(&user, Action::CaseDetailReport) {
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

    match case_detail(&registry, filter).await {
        Ok(cases) => case_list_response(cases),
        Err(err) => service_error_response(&err),
    }
}
