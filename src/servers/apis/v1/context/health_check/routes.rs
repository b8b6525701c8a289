//! API routes for the [`health_check`](crate::servers::apis::v1::context::health_check)
//! API context.
//!
//! - `GET /health`
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::health_check_handler;
use crate::core::Registry;

/// It adds the health check route. It does not require a session.
pub fn add(prefix: &str, router: Router, registry: Arc<Registry>) -> Router {
    router.route(&format!("{prefix}/health"), get(health_check_handler).with_state(registry))
}
