//! API routes for the [`case`](crate::servers::apis::v1::context::case) API context.
//!
//! - `POST /expedientes`
//! - `GET /expedientes`
//! - `GET /expedientes/:id`
//! - `PUT /expedientes/:id/estado`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::case).
use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{change_status_handler, create_case_handler, get_case_handler, list_cases_handler};
use crate::core::Registry;

/// It adds the routes to the router for the [`case`](crate::servers::apis::v1::context::case) API context.
pub fn add(prefix: &str, router: Router, registry: Arc<Registry>) -> Router {
    router
        .route(
            &format!("{prefix}/expedientes"),
            post(create_case_handler)
                .with_state(registry.clone())
                .get(list_cases_handler)
                .with_state(registry.clone()),
        )
        .route(
            &format!("{prefix}/expedientes/:id"),
            get(get_case_handler).with_state(registry.clone()),
        )
        .route(
            &format!("{prefix}/expedientes/:id/estado"),
            put(change_status_handler).with_state(registry),
        )
}
