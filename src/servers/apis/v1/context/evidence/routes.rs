//! API routes for the [`evidence`](crate::servers::apis::v1::context::evidence) API context.
//!
//! - `POST /expedientes/:id/indicios`
//! - `GET /expedientes/:id/indicios`
//! - `GET /expedientes/:id/indicios/:id_indicio`
//! - `GET /indicios/:id`
//! - `DELETE /indicios/:id`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::evidence).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    create_evidence_handler, delete_evidence_handler, get_evidence_handler, get_evidence_in_case_handler,
    list_evidence_handler,
};
use crate::core::Registry;

/// It adds the routes to the router for the [`evidence`](crate::servers::apis::v1::context::evidence) API context.
pub fn add(prefix: &str, router: Router, registry: Arc<Registry>) -> Router {
    router
        .route(
            &format!("{prefix}/expedientes/:id/indicios"),
            post(create_evidence_handler)
                .with_state(registry.clone())
                .get(list_evidence_handler)
                .with_state(registry.clone()),
        )
        .route(
            &format!("{prefix}/expedientes/:id/indicios/:id_indicio"),
            get(get_evidence_in_case_handler).with_state(registry.clone()),
        )
        .route(
            &format!("{prefix}/indicios/:id"),
            get(get_evidence_handler)
                .with_state(registry.clone())
                .delete(delete_evidence_handler)
                .with_state(registry),
        )
}
