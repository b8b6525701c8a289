//! API routes for the [`auth`](crate::servers::apis::v1::context::auth) API context.
//!
//! - `POST /auth/login`
//! - `GET /protegido`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::auth).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{login_handler, protected_handler};
use crate::core::Registry;

/// It adds the routes that require a session.
#[allow(clippy::needless_pass_by_value)]
pub fn add(prefix: &str, router: Router, _registry: Arc<Registry>) -> Router {
    router.route(&format!("{prefix}/protegido"), get(protected_handler))
}

/// It adds the login route.
pub fn add_public(prefix: &str, router: Router, registry: Arc<Registry>) -> Router {
    router.route(&format!("{prefix}/auth/login"), post(login_handler).with_state(registry))
}
