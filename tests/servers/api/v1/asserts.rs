use evidence_tracker::servers::apis::v1::context::auth::resources::{Access, Session};
use evidence_tracker::servers::apis::v1::context::case::resources::{Case, CaseCreated};
use evidence_tracker::servers::apis::v1::context::evidence::resources::{Evidence, EvidenceCreated};
use evidence_tracker::servers::apis::v1::context::health_check::resources::Report;
use evidence_tracker::servers::apis::v1::context::report::resources::CaseSummary;
use evidence_tracker::servers::apis::v1::responses::Message;
use reqwest::{Response, StatusCode};

// Resource responses

pub async fn assert_session(response: Response) -> Session {
    assert_eq!(response.status(), 200);
    assert_json_content_type(&response);
    response.json::<Session>().await.unwrap()
}

pub async fn assert_access_granted(response: Response) -> Access {
    assert_eq!(response.status(), 200);
    let access = response.json::<Access>().await.unwrap();
    assert_eq!(access.message, "Acceso permitido");
    access
}

pub async fn assert_case_created(response: Response) -> i64 {
    assert_eq!(response.status(), 200);
    let created = response.json::<CaseCreated>().await.unwrap();
    assert_eq!(created.message, "Expediente creado");
    created.id_expediente
}

pub async fn assert_case(response: Response) -> Case {
    assert_eq!(response.status(), 200);
    assert_json_content_type(&response);
    response.json::<Case>().await.unwrap()
}

pub async fn assert_case_list(response: Response) -> Vec<Case> {
    assert_eq!(response.status(), 200);
    assert_json_content_type(&response);
    response.json::<Vec<Case>>().await.unwrap()
}

pub async fn assert_evidence_created(response: Response) -> i64 {
    assert_eq!(response.status(), 200);
    let created = response.json::<EvidenceCreated>().await.unwrap();
    assert_eq!(created.message, "Indicio creado correctamente");
    created.id_indicio
}

pub async fn assert_evidence(response: Response) -> Evidence {
    assert_eq!(response.status(), 200);
    response.json::<Evidence>().await.unwrap()
}

pub async fn assert_evidence_list(response: Response) -> Vec<Evidence> {
    assert_eq!(response.status(), 200);
    response.json::<Vec<Evidence>>().await.unwrap()
}

pub async fn assert_case_summary(response: Response) -> CaseSummary {
    assert_eq!(response.status(), 200);
    response.json::<CaseSummary>().await.unwrap()
}

pub async fn assert_health_report(response: Response) -> Report {
    response.json::<Report>().await.unwrap()
}

// OK responses

pub async fn assert_ok_message(response: Response, message: &str) {
    assert_message(response, StatusCode::OK, message).await;
}

// Error responses

pub async fn assert_bad_request(response: Response, message: &str) {
    assert_message(response, StatusCode::BAD_REQUEST, message).await;
}

pub async fn assert_invalid_status(response: Response) {
    assert_bad_request(response, "Estado inválido. Use uno de: pendiente, aprobado, rechazado").await;
}

pub async fn assert_invalid_date(response: Response) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let message = response.json::<Message>().await.unwrap().message;
    assert!(message.starts_with("Fecha inválida"), "unexpected message: {message}");
}

pub async fn assert_unauthorized(response: Response, message: &str) {
    assert_message(response, StatusCode::UNAUTHORIZED, message).await;
}

pub async fn assert_token_not_provided(response: Response) {
    assert_unauthorized(response, "Token no proporcionado").await;
}

pub async fn assert_token_not_valid(response: Response) {
    assert_unauthorized(response, "Token inválido o expirado").await;
}

pub async fn assert_invalid_credentials(response: Response) {
    assert_unauthorized(response, "Credenciales inválidas").await;
}

pub async fn assert_forbidden(response: Response) {
    assert_message(response, StatusCode::FORBIDDEN, "No tiene permisos para esta acción").await;
}

pub async fn assert_case_not_found(response: Response) {
    assert_message(response, StatusCode::NOT_FOUND, "Expediente no encontrado").await;
}

pub async fn assert_evidence_not_found(response: Response) {
    assert_message(response, StatusCode::NOT_FOUND, "Indicio no encontrado").await;
}

pub async fn assert_conflict(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_json_content_type(&response);
}

pub async fn assert_internal_server_error(response: Response) {
    assert_message(response, StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor").await;
}

async fn assert_message(response: Response, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    assert_json_content_type(&response);
    assert_eq!(
        response.json::<Message>().await.unwrap(),
        Message {
            message: message.to_string()
        }
    );
}

fn assert_json_content_type(response: &Response) {
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
}
