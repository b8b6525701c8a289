use evidence_tracker_primitives::Role;
use evidence_tracker_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_access_granted, assert_bad_request, assert_internal_server_error, assert_invalid_credentials, assert_session,
};
use crate::servers::api::v1::client::{Client, LoginForm};
use crate::servers::api::Started;

fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn should_allow_a_registered_user_to_log_in() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let user = env.add_user("ana@example.com", "secret", Role::Tecnico).await;

    let response = Client::new(env.get_connection_info())
        .login(&login_form("ana@example.com", "secret"))
        .await;

    let session = assert_session(response).await;

    assert_eq!(session.user.id_usuario, user.id.0);
    assert_eq!(session.user.email, "ana@example.com");
    assert_eq!(session.user.rol, Role::Tecnico);

    let claims = env.registry.sessions.decode(&session.token).unwrap();

    assert_eq!(claims.user, user);
    assert_eq!(claims.exp - claims.iat, env.registry.sessions.lifetime().as_secs());

    env.stop().await;
}

#[tokio::test]
async fn should_issue_a_token_that_authenticates_the_user() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    env.add_user("luis@example.com", "secret", Role::Coordinador).await;

    let session = assert_session(
        Client::new(env.get_connection_info())
            .login(&login_form("luis@example.com", "secret"))
            .await,
    )
    .await;

    let access = assert_access_granted(
        Client::new(env.get_connection_info_with_token(&session.token))
            .check_session()
            .await,
    )
    .await;

    assert_eq!(access.user, session.user);

    env.stop().await;
}

#[tokio::test]
async fn should_answer_the_same_for_an_unknown_email_and_a_wrong_password() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    env.add_user("ana@example.com", "secret", Role::Tecnico).await;

    let client = Client::new(env.get_connection_info());

    assert_invalid_credentials(client.login(&login_form("nadie@example.com", "secret")).await).await;
    assert_invalid_credentials(client.login(&login_form("ana@example.com", "wrong")).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_require_the_email_and_the_password() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    assert_bad_request(
        client.login(&login_form("", "secret")).await,
        "Email y contraseña son requeridos",
    )
    .await;

    assert_bad_request(
        client.post_form("auth/login", &serde_json::json!({ "email": "ana@example.com" })).await,
        "Email y contraseña son requeridos",
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_when_the_store_fails() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    env.force_database_error().await;

    let response = Client::new(env.get_connection_info())
        .login(&login_form("ana@example.com", "secret"))
        .await;

    assert_internal_server_error(response).await;

    env.stop().await;
}
