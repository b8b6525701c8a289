use evidence_tracker::servers::apis::v1::context::report::resources::StatusCount;
use evidence_tracker_primitives::{CaseStatus, Role};
use evidence_tracker_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::http::{Query, QueryParam};
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_bad_request, assert_case_created, assert_case_list, assert_case_summary, assert_internal_server_error,
    assert_invalid_date,
};
use crate::servers::api::v1::client::{ChangeStatusForm, Client, CreateCaseForm};
use crate::servers::api::Started;

#[tokio::test]
async fn should_summarize_the_cases_by_status() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Coordinador).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    for number in ["MP-0001", "MP-0002", "MP-0003"] {
        assert_case_created(client.create_case(&CreateCaseForm::new(number)).await).await;
    }

    let approved = assert_case_created(client.create_case(&CreateCaseForm::new("MP-0004")).await).await;
    client
        .change_case_status(&approved.to_string(), &ChangeStatusForm::to("aprobado"))
        .await;

    let summary = assert_case_summary(client.get_case_summary_report(Query::empty()).await).await;

    assert_eq!(summary.total_registros, 4);
    assert_eq!(
        summary.detalle_por_estado.iter().map(|group| group.cantidad).sum::<u64>(),
        summary.total_registros
    );
    assert!(summary.detalle_por_estado.contains(&StatusCount {
        estado: CaseStatus::Pendiente,
        cantidad: 3
    }));
    assert!(summary.detalle_por_estado.contains(&StatusCount {
        estado: CaseStatus::Aprobado,
        cantidad: 1
    }));

    env.stop().await;
}

#[tokio::test]
async fn should_return_a_zero_total_for_a_period_without_cases() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Coordinador).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    assert_case_created(client.create_case(&CreateCaseForm::new("MP-0001")).await).await;

    let summary = assert_case_summary(
        client
            .get_case_summary_report(Query::params(
                [
                    QueryParam::new("fecha_inicio", "2000-01-01"),
                    QueryParam::new("fecha_fin", "2000-01-31"),
                ]
                .to_vec(),
            ))
            .await,
    )
    .await;

    assert_eq!(summary.total_registros, 0);
    assert!(summary.detalle_por_estado.is_empty());

    env.stop().await;
}

#[tokio::test]
async fn should_fail_summarizing_with_an_invalid_date() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Coordinador).await;

    let response = Client::new(env.get_connection_info_with_token(&token))
        .get_case_summary_report(Query::params([QueryParam::new("fecha_fin", "2024-13-01")].to_vec()))
        .await;

    assert_invalid_date(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_list_the_cases_matching_the_detail_filters() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Coordinador).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let rejected = assert_case_created(client.create_case(&CreateCaseForm::new("MP-0001")).await).await;
    assert_case_created(client.create_case(&CreateCaseForm::new("MP-0002")).await).await;

    client
        .change_case_status(&rejected.to_string(), &ChangeStatusForm::to("rechazado"))
        .await;

    let cases = assert_case_list(
        client
            .get_case_detail_report(Query::params([QueryParam::new("estado", "rechazado")].to_vec()))
            .await,
    )
    .await;

    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].id_expediente, rejected);
    assert_eq!(cases[0].estado, CaseStatus::Rechazado);

    env.stop().await;
}

#[tokio::test]
async fn should_reject_an_unknown_status_in_the_detail_report() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Coordinador).await;

    let response = Client::new(env.get_connection_info_with_token(&token))
        .get_case_detail_report(Query::params([QueryParam::new("estado", "cerrado")].to_vec()))
        .await;

    assert_bad_request(response, "Estado inválido. Use uno de: pendiente, aprobado, rechazado").await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_summarizing_when_the_store_fails() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Coordinador).await;

    env.force_database_error().await;

    let response = Client::new(env.get_connection_info_with_token(&token))
        .get_case_summary_report(Query::empty())
        .await;

    assert_internal_server_error(response).await;

    env.stop().await;
}
