//! API handlers for the [`health_check`](crate::servers::apis::v1::context::health_check)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::resources::Report;
use crate::core::services::health::check_store;
use crate::core::Registry;

/// Endpoint for container health check.
pub async fn health_check_handler(State(registry): State<Arc<Registry>>) -> Response {
    match check_store(&registry).await {
        Ok(_) => Json(Report::healthy()).into_response(),
        Err(err) => {
            error!(target: "API", "health check failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Report::unhealthy("La base de datos no responde")),
            )
                .into_response()
        }
    }
}
