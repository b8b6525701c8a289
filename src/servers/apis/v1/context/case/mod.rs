//! Case API context.
//!
//! This API context is responsible for the case files ("expedientes") and
//! their review by a coordinator.
//!
//! # Endpoints
//!
//! - [Create a case](#create-a-case)
//! - [List cases](#list-cases)
//! - [Get a case](#get-a-case)
//! - [Change the status of a case](#change-the-status-of-a-case)
//!
//! # Create a case
//!
//! `POST /api/expedientes`
//!
//! Any authenticated user. The case is registered by the caller and starts
//! as `pendiente`. Case numbers are unique.
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:3001/api/expedientes" \
//!      -H "Authorization: Bearer $TOKEN" \
//!      -H "Content-Type: application/json" \
//!      -d '{"numero_expediente": "MP-0001"}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "message": "Expediente creado",
//!     "id_expediente": 1
//! }
//! ```
//!
//! **Error responses**
//!
//! - `400` `{"message": "El número de expediente es requerido"}`
//!
//! # List cases
//!
//! `GET /api/expedientes`
//!
//! Any authenticated user.
//!
//! **Query parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `fecha_inicio` | date | Registered on or after | No | `2024-03-01`
//! `fecha_fin` | date | Registered on or before. A date covers the whole day | No | `2024-03-31`
//! `estado` | status | `pendiente`, `aprobado` or `rechazado` | No | `pendiente`
//!
//! Dates are `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:3001/api/expedientes?estado=pendiente" \
//!      -H "Authorization: Bearer $TOKEN"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! [
//!     {
//!         "id_expediente": 1,
//!         "numero_expediente": "MP-0001",
//!         "estado": "pendiente",
//!         "id_tecnico_registra": 2,
//!         "fecha_registro": "2024-03-01T10:00:00",
//!         "justificacion_rechazo": null
//!     }
//! ]
//! ```
//!
//! **Resource**
//!
//! Refer to the API [`Case`](crate::servers::apis::v1::context::case::resources::Case)
//! resource for more information about the response attributes.
//!
//! # Get a case
//!
//! `GET /api/expedientes/:id`
//!
//! Any authenticated user. It returns one case with the same attributes as
//! the listing, or `404` `{"message": "Expediente no encontrado"}`.
//!
//! # Change the status of a case
//!
//! `PUT /api/expedientes/:id/estado`
//!
//! Coordinators only.
//!
//! ```bash
//! curl -X PUT "http://127.0.0.1:3001/api/expedientes/1/estado" \
//!      -H "Authorization: Bearer $TOKEN" \
//!      -H "Content-Type: application/json" \
//!      -d '{"nuevo_estado": "rechazado", "justificacion": "Falta cadena de custodia"}'
//! ```
//!
//! The allowed transitions are `pendiente` to `aprobado` or `rechazado`, and
//! `aprobado` or `rechazado` back to `pendiente`.
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "message": "Estado actualizado correctamente"
//! }
//! ```
//!
//! **Error responses**
//!
//! - `400` `{"message": "Estado inválido. Use uno de: pendiente, aprobado, rechazado"}`
//! - `403` when the caller is not a coordinator.
//! - `404` when the case does not exist.
//! - `409` when the transition is not allowed from the current status.
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
