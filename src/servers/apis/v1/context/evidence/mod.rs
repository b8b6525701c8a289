//! Evidence API context.
//!
//! This API context is responsible for the evidence items ("indicios")
//! found in a case.
//!
//! # Endpoints
//!
//! - [Register an evidence item](#register-an-evidence-item)
//! - [List the evidence of a case](#list-the-evidence-of-a-case)
//! - [Get an evidence item](#get-an-evidence-item)
//! - [Delete an evidence item](#delete-an-evidence-item)
//!
//! # Register an evidence item
//!
//! `POST /api/expedientes/:id/indicios`
//!
//! Any authenticated user. Only the description is required. Missing or
//! blank optional attributes are stored as `null`. The weight may be sent
//! as a string or as a number.
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:3001/api/expedientes/1/indicios" \
//!      -H "Authorization: Bearer $TOKEN" \
//!      -H "Content-Type: application/json" \
//!      -d '{"descripcion": "Cuchillo", "color": "plateado", "peso_libras": "0.5"}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "message": "Indicio creado correctamente",
//!     "id_indicio": 1
//! }
//! ```
//!
//! **Error responses**
//!
//! - `400` `{"message": "La descripción es requerida"}`
//! - `500` if the case does not exist.
//!
//! # List the evidence of a case
//!
//! `GET /api/expedientes/:id/indicios`
//!
//! **Example response** `200`
//!
//! ```json
//! [
//!     {
//!         "id_indicio": 1,
//!         "id_expediente": 1,
//!         "descripcion": "Cuchillo",
//!         "color": "plateado",
//!         "tamano": null,
//!         "peso_libras": "0.5",
//!         "ubicacion": null,
//!         "fecha_registro": "2024-03-01T10:05:00"
//!     }
//! ]
//! ```
//!
//! **Resource**
//!
//! Refer to the API [`Evidence`](crate::servers::apis::v1::context::evidence::resources::Evidence)
//! resource for more information about the response attributes.
//!
//! # Get an evidence item
//!
//! `GET /api/indicios/:id`
//!
//! `GET /api/expedientes/:id/indicios/:id_indicio`
//!
//! The second form also checks the item belongs to the case. Both answer
//! `404` `{"message": "Indicio no encontrado"}` when there is no match.
//!
//! # Delete an evidence item
//!
//! `DELETE /api/indicios/:id`
//!
//! Coordinators only. Deleting an item that does not exist also succeeds.
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "message": "Indicio eliminado (si existía)"
//! }
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
