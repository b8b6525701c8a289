//! API responses for the [`auth`](crate::servers::apis::v1::context::auth) API context.
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::resources::{Access, Session, User};
use crate::core::auth::session::SessionUser;
use crate::core::services::authentication::Login;

/// `200` response with the session token and the user.
#[must_use]
pub fn session_response(login: Login) -> Response {
    Json(Session::from(login)).into_response()
}

/// `200` response to the session check.
#[must_use]
pub fn access_granted_response(user: SessionUser) -> Response {
    Json(Access {
        message: "Acceso permitido".to_string(),
        user: User::from(user),
    })
    .into_response()
}
