//! Report API context.
//!
//! Coordinator reports over the registered cases.
//!
//! # Endpoints
//!
//! - [Case summary](#case-summary)
//! - [Case detail](#case-detail)
//!
//! # Case summary
//!
//! `GET /api/reportes/expedientes-resumen`
//!
//! Counts the cases registered in the period, grouped by status.
//!
//! **Query parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `fecha_inicio` | date | Registered on or after | No | `2024-03-01`
//! `fecha_fin` | date | Registered on or before. A date covers the whole day | No | `2024-03-31`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:3001/api/reportes/expedientes-resumen?fecha_inicio=2024-03-01" \
//!      -H "Authorization: Bearer $TOKEN"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "total_registros": 5,
//!     "detalle_por_estado": [
//!         { "estado": "aprobado", "cantidad": 2 },
//!         { "estado": "pendiente", "cantidad": 3 }
//!     ]
//! }
//! ```
//!
//! `total_registros` is the sum of the groups. It is `0` when there are no
//! cases in the period.
//!
//! # Case detail
//!
//! `GET /api/reportes/expedientes-detalle`
//!
//! Lists the cases registered in the period, optionally only the ones in one
//! status (`estado`). The rows are the same as in the
//! [case listing](crate::servers::apis::v1::context::case#list-cases).
//!
//! An unknown `estado` is rejected with `400`
//! `{"message": "Estado inválido. Use uno de: pendiente, aprobado, rechazado"}`.
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
