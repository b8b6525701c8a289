//! API responses for the [`report`](crate::servers::apis::v1::context::report) API context.
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::resources::CaseSummary;
use crate::core::reports;

/// `200` response with a json [`CaseSummary`] resource.
#[must_use]
pub fn case_summary_response(summary: reports::CaseSummary) -> Response {
    Json(CaseSummary::from(summary)).into_response()
}
