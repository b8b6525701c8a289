use evidence_tracker_primitives::Role;
use evidence_tracker_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::http::{Query, QueryParam};
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{assert_case_created, assert_case_summary, assert_forbidden, assert_ok_message};
use crate::servers::api::v1::client::{ChangeStatusForm, Client, CreateCaseForm};
use crate::servers::api::Started;

#[tokio::test]
async fn should_not_allow_technicians_to_review_cases() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let case_id = assert_case_created(client.create_case(&CreateCaseForm::new("MP-0001")).await).await;

    let response = client
        .change_case_status(&case_id.to_string(), &ChangeStatusForm::to("aprobado"))
        .await;

    assert_forbidden(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_technicians_to_delete_evidence() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;

    let response = Client::new(env.get_connection_info_with_token(&token))
        .delete_evidence("1")
        .await;

    assert_forbidden(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_technicians_to_read_the_reports() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    assert_forbidden(client.get_case_summary_report(Query::empty()).await).await;
    assert_forbidden(client.get_case_detail_report(Query::empty()).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_check_the_role_before_validating_the_request() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    // Invalid id, invalid status and unknown case would be 400 or 404
    assert_forbidden(client.change_case_status("abc", &ChangeStatusForm::to("aprobado")).await).await;
    assert_forbidden(client.change_case_status("999", &ChangeStatusForm::to("cerrado")).await).await;
    assert_forbidden(client.change_case_status("999", &ChangeStatusForm::to("aprobado")).await).await;

    assert_forbidden(client.delete_evidence("abc").await).await;

    assert_forbidden(
        client
            .get_case_summary_report(Query::params([QueryParam::new("fecha_inicio", "01/03/2024")].to_vec()))
            .await,
    )
    .await;
    assert_forbidden(
        client
            .get_case_detail_report(Query::params([QueryParam::new("estado", "cerrado")].to_vec()))
            .await,
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_coordinators_to_perform_restricted_actions() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Coordinador).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    assert_ok_message(client.delete_evidence("1").await, "Indicio eliminado (si existía)").await;

    let summary = assert_case_summary(client.get_case_summary_report(Query::empty()).await).await;

    assert_eq!(summary.total_registros, 0);

    env.stop().await;
}
