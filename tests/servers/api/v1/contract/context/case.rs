use evidence_tracker_primitives::{CaseStatus, Role};
use evidence_tracker_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::http::{Query, QueryParam};
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_bad_request, assert_case, assert_case_created, assert_case_list, assert_case_not_found, assert_conflict,
    assert_internal_server_error, assert_invalid_date, assert_invalid_status, assert_ok_message,
};
use crate::servers::api::v1::client::{ChangeStatusForm, Client, CreateCaseForm};
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_registering_a_case_in_pending_status() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let technician = env.add_user("ana@example.com", "secret", Role::Tecnico).await;
    let token = env.registry.sessions.encode(&technician).unwrap();
    let client = Client::new(env.get_connection_info_with_token(&token));

    let case_id = assert_case_created(client.create_case(&CreateCaseForm::new("MP-0001")).await).await;

    let case = assert_case(client.get_case(&case_id.to_string()).await).await;

    assert_eq!(case.id_expediente, case_id);
    assert_eq!(case.numero_expediente, "MP-0001");
    assert_eq!(case.estado, CaseStatus::Pendiente);
    assert_eq!(case.id_tecnico_registra, technician.id.0);
    assert_eq!(case.justificacion_rechazo, None);

    env.stop().await;
}

#[tokio::test]
async fn should_store_the_case_number_as_sent() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let case_id = assert_case_created(client.create_case(&CreateCaseForm::new("  MP-0001  ")).await).await;

    let case = assert_case(client.get_case(&case_id.to_string()).await).await;

    assert_eq!(case.numero_expediente, "  MP-0001  ");

    env.stop().await;
}

#[tokio::test]
async fn should_require_the_case_number() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    assert_bad_request(
        client.create_case(&CreateCaseForm::new("   ")).await,
        "El número de expediente es requerido",
    )
    .await;

    assert_bad_request(
        client.post_form("expedientes", &serde_json::json!({})).await,
        "El número de expediente es requerido",
    )
    .await;

    // A wrongly typed body is handled as an empty one
    assert_bad_request(
        client
            .post_form("expedientes", &serde_json::json!({ "numero_expediente": 123 }))
            .await,
        "El número de expediente es requerido",
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_registering_a_duplicated_case_number() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    assert_case_created(client.create_case(&CreateCaseForm::new("MP-0001")).await).await;

    assert_internal_server_error(client.create_case(&CreateCaseForm::new("MP-0001")).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_listing_the_cases_newest_first() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    assert!(assert_case_list(client.list_cases(Query::empty()).await).await.is_empty());

    let first = assert_case_created(client.create_case(&CreateCaseForm::new("MP-0001")).await).await;
    let second = assert_case_created(client.create_case(&CreateCaseForm::new("MP-0002")).await).await;

    let cases = assert_case_list(client.list_cases(Query::empty()).await).await;

    let ids: Vec<i64> = cases.iter().map(|case| case.id_expediente).collect();

    assert_eq!(ids, vec![second, first]);

    env.stop().await;
}

#[tokio::test]
async fn should_allow_filtering_the_cases_by_status_and_period() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Coordinador).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let approved = assert_case_created(client.create_case(&CreateCaseForm::new("MP-0001")).await).await;
    assert_case_created(client.create_case(&CreateCaseForm::new("MP-0002")).await).await;

    client
        .change_case_status(&approved.to_string(), &ChangeStatusForm::to("aprobado"))
        .await;

    let cases = assert_case_list(
        client
            .list_cases(Query::params([QueryParam::new("estado", "aprobado")].to_vec()))
            .await,
    )
    .await;

    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].id_expediente, approved);

    let cases = assert_case_list(
        client
            .list_cases(Query::params(
                [
                    QueryParam::new("fecha_inicio", "2000-01-01"),
                    QueryParam::new("fecha_fin", "2000-12-31"),
                ]
                .to_vec(),
            ))
            .await,
    )
    .await;

    assert!(cases.is_empty());

    env.stop().await;
}

#[tokio::test]
async fn should_fail_listing_the_cases_with_invalid_filters() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    assert_invalid_status(
        client
            .list_cases(Query::params([QueryParam::new("estado", "cerrado")].to_vec()))
            .await,
    )
    .await;

    assert_invalid_date(
        client
            .list_cases(Query::params([QueryParam::new("fecha_inicio", "01/03/2024")].to_vec()))
            .await,
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_a_case_that_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    assert_case_not_found(client.get_case("999").await).await;

    assert_bad_request(client.get_case("abc").await, "ID de expediente inválido").await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_coordinators_to_approve_a_pending_case() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let technician_token = env.session_token_for(Role::Tecnico).await;
    let coordinator_token = env.session_token_for(Role::Coordinador).await;

    let technician = Client::new(env.get_connection_info_with_token(&technician_token));
    let coordinator = Client::new(env.get_connection_info_with_token(&coordinator_token));

    let case_id = assert_case_created(technician.create_case(&CreateCaseForm::new("MP-0001")).await)
        .await
        .to_string();

    assert_eq!(assert_case(technician.get_case(&case_id).await).await.estado, CaseStatus::Pendiente);

    assert_ok_message(
        coordinator
            .change_case_status(&case_id, &ChangeStatusForm::to("aprobado"))
            .await,
        "Estado actualizado correctamente",
    )
    .await;

    assert_eq!(assert_case(technician.get_case(&case_id).await).await.estado, CaseStatus::Aprobado);

    env.stop().await;
}

#[tokio::test]
async fn should_keep_the_justification_of_a_rejected_case() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Coordinador).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let case_id = assert_case_created(client.create_case(&CreateCaseForm::new("MP-0001")).await)
        .await
        .to_string();

    let form = ChangeStatusForm {
        nuevo_estado: "rechazado".to_string(),
        justificacion: Some("Falta cadena de custodia".to_string()),
    };

    assert_ok_message(
        client.change_case_status(&case_id, &form).await,
        "Estado actualizado correctamente",
    )
    .await;

    let case = assert_case(client.get_case(&case_id).await).await;

    assert_eq!(case.estado, CaseStatus::Rechazado);
    assert_eq!(case.justificacion_rechazo, Some("Falta cadena de custodia".to_string()));

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_transitions_out_of_the_review_cycle() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Coordinador).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let case_id = assert_case_created(client.create_case(&CreateCaseForm::new("MP-0001")).await)
        .await
        .to_string();

    client.change_case_status(&case_id, &ChangeStatusForm::to("aprobado")).await;

    assert_conflict(client.change_case_status(&case_id, &ChangeStatusForm::to("aprobado")).await).await;
    assert_conflict(client.change_case_status(&case_id, &ChangeStatusForm::to("rechazado")).await).await;

    assert_eq!(assert_case(client.get_case(&case_id).await).await.estado, CaseStatus::Aprobado);

    env.stop().await;
}

#[tokio::test]
async fn should_fail_changing_the_status_with_invalid_input() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Coordinador).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let case_id = assert_case_created(client.create_case(&CreateCaseForm::new("MP-0001")).await)
        .await
        .to_string();

    assert_invalid_status(client.change_case_status(&case_id, &ChangeStatusForm::to("cerrado")).await).await;

    assert_case_not_found(client.change_case_status("999", &ChangeStatusForm::to("aprobado")).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_listing_the_cases_when_the_store_fails() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;

    env.force_database_error().await;

    let response = Client::new(env.get_connection_info_with_token(&token))
        .list_cases(Query::empty())
        .await;

    assert_internal_server_error(response).await;

    env.stop().await;
}
