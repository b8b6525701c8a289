//! Route initialization for the v1 API.
use std::sync::Arc;

use axum::Router;

use super::context::{auth, case, evidence, health_check, report};
use crate::core::Registry;

/// Add the routes that require a session token.
pub fn add(prefix: &str, router: Router, registry: Arc<Registry>) -> Router {
    let router = auth::routes::add(prefix, router, registry.clone());
    let router = case::routes::add(prefix, router, registry.clone());
    let router = evidence::routes::add(prefix, router, registry.clone());
    report::routes::add(prefix, router, registry)
}

/// Add the routes open to anonymous clients.
pub fn add_public(prefix: &str, router: Router, registry: Arc<Registry>) -> Router {
    let router = auth::routes::add_public(prefix, router, registry.clone());
    health_check::routes::add(prefix, router, registry)
}
