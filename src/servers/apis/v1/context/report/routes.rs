//! API routes for the [`report`](crate::servers::apis::v1::context::report) API context.
//!
//! - `GET /reportes/expedientes-resumen`
//! - `GET /reportes/expedientes-detalle`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::report).
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::{case_detail_handler, case_summary_handler};
use crate::core::Registry;

/// It adds the routes to the router for the [`report`](crate::servers::apis::v1::context::report) API context.
pub fn add(prefix: &str, router: Router, registry: Arc<Registry>) -> Router {
    router
        .route(
            &format!("{prefix}/reportes/expedientes-resumen"),
            get(case_summary_handler).with_state(registry.clone()),
        )
        .route(
            &format!("{prefix}/reportes/expedientes-detalle"),
            get(case_detail_handler).with_state(registry),
        )
}
