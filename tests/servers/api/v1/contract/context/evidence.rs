use evidence_tracker_primitives::Role;
use evidence_tracker_test_helpers::configuration;
use serde_json::json;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_bad_request, assert_case_created, assert_evidence, assert_evidence_created, assert_evidence_list,
    assert_evidence_not_found, assert_ok_message,
};
use crate::servers::api::v1::client::{Client, CreateCaseForm};
use crate::servers::api::Started;

async fn new_case(client: &Client, number: &str) -> String {
    assert_case_created(client.create_case(&CreateCaseForm::new(number)).await)
        .await
        .to_string()
}

#[tokio::test]
async fn should_allow_registering_evidence_with_all_its_attributes() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let case_id = new_case(&client, "MP-0001").await;

    let evidence_id = assert_evidence_created(
        client
            .create_evidence(
                &case_id,
                &json!({
                    "descripcion": "Arma blanca",
                    "color": "gris",
                    "tamano": "30 cm",
                    "peso_libras": "1.5",
                    "ubicacion": "Cocina"
                }),
            )
            .await,
    )
    .await;

    let evidence = assert_evidence(client.get_evidence(&evidence_id.to_string()).await).await;

    assert_eq!(evidence.id_indicio, evidence_id);
    assert_eq!(evidence.id_expediente.to_string(), case_id);
    assert_eq!(evidence.descripcion, "Arma blanca");
    assert_eq!(evidence.color, Some("gris".to_string()));
    assert_eq!(evidence.tamano, Some("30 cm".to_string()));
    assert_eq!(evidence.peso_libras, Some("1.5".to_string()));
    assert_eq!(evidence.ubicacion, Some("Cocina".to_string()));

    env.stop().await;
}

#[tokio::test]
async fn should_allow_registering_evidence_without_the_optional_attributes() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let case_id = new_case(&client, "MP-0001").await;

    let evidence_id = assert_evidence_created(
        client
            .create_evidence(&case_id, &json!({ "descripcion": "Casquillo", "color": null }))
            .await,
    )
    .await;

    let evidence = assert_evidence(client.get_evidence_in_case(&case_id, &evidence_id.to_string()).await).await;

    assert_eq!(evidence.descripcion, "Casquillo");
    assert_eq!(evidence.color, None);
    assert_eq!(evidence.tamano, None);
    assert_eq!(evidence.peso_libras, None);
    assert_eq!(evidence.ubicacion, None);

    env.stop().await;
}

#[tokio::test]
async fn should_store_the_attributes_as_sent() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let case_id = new_case(&client, "MP-0001").await;

    let evidence_id = assert_evidence_created(
        client
            .create_evidence(&case_id, &json!({ "descripcion": "  Cuchillo  ", "color": "  rojo ", "tamano": "  " }))
            .await,
    )
    .await;

    let evidence = assert_evidence(client.get_evidence(&evidence_id.to_string()).await).await;

    assert_eq!(evidence.descripcion, "  Cuchillo  ");
    assert_eq!(evidence.color, Some("  rojo ".to_string()));
    assert_eq!(evidence.tamano, None);

    env.stop().await;
}

#[tokio::test]
async fn should_accept_the_weight_as_a_number() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let case_id = new_case(&client, "MP-0001").await;

    let evidence_id = assert_evidence_created(
        client
            .create_evidence(&case_id, &json!({ "descripcion": "Teléfono", "peso_libras": 0.4 }))
            .await,
    )
    .await;

    let evidence = assert_evidence(client.get_evidence(&evidence_id.to_string()).await).await;

    assert_eq!(evidence.peso_libras, Some("0.4".to_string()));

    env.stop().await;
}

#[tokio::test]
async fn should_require_the_description_before_touching_the_store() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;

    env.force_database_error().await;

    let client = Client::new(env.get_connection_info_with_token(&token));

    assert_bad_request(
        client.create_evidence("1", &json!({ "descripcion": "   ", "color": "rojo" })).await,
        "La descripción es requerida",
    )
    .await;

    assert_bad_request(client.create_evidence("1", &json!({})).await, "La descripción es requerida").await;

    env.stop().await;
}

#[tokio::test]
async fn should_list_the_evidence_of_a_case_in_registration_order() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let case_id = new_case(&client, "MP-0001").await;
    let other_case_id = new_case(&client, "MP-0002").await;

    let first = assert_evidence_created(client.create_evidence(&case_id, &json!({ "descripcion": "Uno" })).await).await;
    let second = assert_evidence_created(client.create_evidence(&case_id, &json!({ "descripcion": "Dos" })).await).await;
    assert_evidence_created(client.create_evidence(&other_case_id, &json!({ "descripcion": "Otro" })).await).await;

    let evidence = assert_evidence_list(client.list_evidence(&case_id).await).await;

    let ids: Vec<i64> = evidence.iter().map(|item| item.id_indicio).collect();

    assert_eq!(ids, vec![first, second]);

    assert!(assert_evidence_list(client.list_evidence("999").await).await.is_empty());

    env.stop().await;
}

#[tokio::test]
async fn should_not_find_evidence_through_another_case() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Tecnico).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let case_id = new_case(&client, "MP-0001").await;
    let other_case_id = new_case(&client, "MP-0002").await;

    let evidence_id = assert_evidence_created(client.create_evidence(&case_id, &json!({ "descripcion": "Uno" })).await)
        .await
        .to_string();

    assert_evidence_not_found(client.get_evidence_in_case(&other_case_id, &evidence_id).await).await;

    assert_evidence_not_found(client.get_evidence("999").await).await;

    assert_bad_request(client.get_evidence("abc").await, "ID de indicio inválido").await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_coordinators_to_delete_evidence() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.session_token_for(Role::Coordinador).await;
    let client = Client::new(env.get_connection_info_with_token(&token));

    let case_id = new_case(&client, "MP-0001").await;

    let evidence_id = assert_evidence_created(client.create_evidence(&case_id, &json!({ "descripcion": "Uno" })).await)
        .await
        .to_string();

    assert_ok_message(client.delete_evidence(&evidence_id).await, "Indicio eliminado (si existía)").await;

    assert_evidence_not_found(client.get_evidence(&evidence_id).await).await;

    // Deleting it again still succeeds
    assert_ok_message(client.delete_evidence(&evidence_id).await, "Indicio eliminado (si existía)").await;

    env.stop().await;
}
