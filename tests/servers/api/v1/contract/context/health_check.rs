use evidence_tracker::servers::apis::v1::context::health_check::resources::{Report, Status};
use evidence_tracker_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::assert_health_report;
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn health_check_endpoint_should_return_ok_when_the_store_answers() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).health_check().await;

    assert_eq!(response.status(), 200);
    assert_eq!(assert_health_report(response).await, Report::healthy());

    env.stop().await;
}

#[tokio::test]
async fn health_check_endpoint_should_return_an_error_when_the_store_fails() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    env.force_database_error().await;

    let response = Client::new(env.get_connection_info()).health_check().await;

    assert_eq!(response.status(), 500);

    let report = assert_health_report(response).await;

    assert_eq!(report.status, Status::Error);
    assert!(report.message.is_some());

    env.stop().await;
}
