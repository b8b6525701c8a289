//! API handlers for the [`auth`](crate::servers::apis::v1::context::auth) API context.
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;

use super::forms::LoginForm;
use super::responses::{access_granted_response, session_response};
use crate::core::services::authentication::login;
use crate::core::Registry;
use crate::servers::apis::v1::middlewares::auth::Authenticated;
use crate::servers::apis::json_body_or_default;
use crate::servers::apis::v1::responses::service_error_response;

/// It handles the login request.
///
/// A missing or unreadable body is treated as missing credentials.
///
/// It returns:
///
/// - `200` with a json [`Session`](crate::servers::apis::v1::context::auth::resources::Session).
/// - `400` if the email or the password is missing.
/// - `401` if the credentials are not valid.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::auth#login)
/// for more information about this endpoint.
pub async fn login_handler(State(registry): State<Arc<Registry>>, form: Result<Json<LoginForm>, JsonRejection>) -> Response {
    let form = json_body_or_default(form);

    match login(&registry, form.email.as_deref(), form.password.as_deref()).await {
        Ok(login) => session_response(login),
        Err(err) => service_error_response(&err),
    }
}

/// It handles the session check. Any authenticated user is allowed.
pub async fn protected_handler(Authenticated(user): Authenticated) -> Response {
    access_granted_response(user)
}
