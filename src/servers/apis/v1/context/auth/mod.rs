//! Authentication API context.
//!
//! This API context is responsible for exchanging user credentials for a
//! session token.
//!
//! # Endpoints
//!
//! - [Login](#login)
//! - [Check the session](#check-the-session)
//!
//! # Login
//!
//! `POST /api/auth/login`
//!
//! It verifies the email and password and issues a session token valid for
//! the configured lifetime (8 hours by default).
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:3001/api/auth/login" \
//!      -H "Content-Type: application/json" \
//!      -d '{"email": "ana@example.com", "password": "secret"}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!     "user": {
//!         "id_usuario": 1,
//!         "nombre": "Ana Pérez",
//!         "email": "ana@example.com",
//!         "rol": "tecnico"
//!     }
//! }
//! ```
//!
//! **Error responses**
//!
//! - `400` `{"message": "Email y contraseña son requeridos"}`
//! - `401` `{"message": "Credenciales inválidas"}`, for an unknown email and
//!   for a wrong password alike.
//!
//! # Check the session
//!
//! `GET /api/protegido`
//!
//! It answers with the user carried by the session token.
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "message": "Acceso permitido",
//!     "user": {
//!         "id_usuario": 1,
//!         "nombre": "Ana Pérez",
//!         "email": "ana@example.com",
//!         "rol": "tecnico"
//!     }
//! }
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
