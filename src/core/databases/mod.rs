//! The persistence module.
//!
//! Persistence is implemented with one [`Database`] trait. Every business
//! operation maps to one call on the trait, and every call maps to one named
//! procedure in the store:
//!
//! Method | Store procedure
//! ---|---
//! [`get_user_by_email`](Database::get_user_by_email) | `sp_usuarios_login`
//! [`create_case`](Database::create_case) | `sp_expediente_crear`
//! [`list_cases`](Database::list_cases) | `sp_expediente_listar`
//! [`get_case`](Database::get_case) | `sp_expediente_obtener`
//! [`change_case_status`](Database::change_case_status) | `sp_expediente_cambiar_estado`
//! [`create_evidence`](Database::create_evidence) | `sp_indicio_crear`
//! [`list_evidence`](Database::list_evidence) | `sp_indicio_listar_por_expediente`
//! [`get_evidence`](Database::get_evidence) | `sp_indicio_obtener`
//! [`delete_evidence`](Database::delete_evidence) | `sp_indicio_eliminar`
//! [`case_summary_report`](Database::case_summary_report) | `sp_reporte_expedientes_resumen`
//! [`case_detail_report`](Database::case_detail_report) | `sp_reporte_expedientes_detalle`
//!
//! There are two implementations of the trait (two drivers):
//!
//! - [`Mysql`](crate::core::databases::mysql::Mysql): calls the stored
//!   procedures. The schema and the procedures are owned by the store.
//! - [`Sqlite`](crate::core::databases::sqlite::Sqlite): an embedded store
//!   for development and tests. It creates its own schema and implements the
//!   procedures in plain SQL.
//!
//! > **NOTICE**: There are no database migrations.
//!
//! The persistent objects are:
//!
//! # Users (`usuarios`)
//!
//! Field | Sample data | Description
//! ---|---|---
//! `id_usuario` | 1 | Autoincrement id
//! `nombre` | `Ana Pérez` | Full name
//! `email` | `ana@example.com` | Login email, unique
//! `rol` | `tecnico` | `tecnico` or `coordinador`
//! `password_hash` | `$2b$10$...` | bcrypt hash
//!
//! # Cases (`expedientes`)
//!
//! Field | Sample data | Description
//! ---|---|---
//! `id_expediente` | 1 | Autoincrement id
//! `numero_expediente` | `MP-0001` | Case number, unique
//! `estado` | `pendiente` | `pendiente`, `aprobado` or `rechazado`
//! `id_tecnico_registra` | 1 | Technician who registered the case
//! `fecha_registro` | `2024-03-01 10:00:00` | Registration time
//! `justificacion_rechazo` | `Falta cadena de custodia` | Justification of the last review
//!
//! # Evidence items (`indicios`)
//!
//! Field | Sample data | Description
//! ---|---|---
//! `id_indicio` | 1 | Autoincrement id
//! `id_expediente` | 1 | Owning case
//! `descripcion` | `Cuchillo de cocina` | Required description
//! `color`, `tamano`, `peso_libras`, `ubicacion` | `rojo` | Optional attributes
//! `fecha_registro` | `2024-03-01 10:05:00` | Registration time
pub mod driver;
pub mod error;
pub mod mysql;
pub mod sqlite;

use std::marker::PhantomData;

use evidence_tracker_primitives::{CaseId, EvidenceId, UserId};

use self::error::Error;
use crate::core::auth::{NewUser, User};
use crate::core::cases::{Case, CaseFilter, NewCase, StatusChange};
use crate::core::evidence::{Evidence, NewEvidence};
use crate::core::period::Period;
use crate::core::reports::StatusCount;

struct Builder<T>
where
    T: Database,
{
    phantom: PhantomData<T>,
}

impl<T> Builder<T>
where
    T: Database + 'static,
{
    /// Builds the driver `T` for the store at `db_path`.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create a database.
    pub(self) fn build(db_path: &str) -> Result<Box<dyn Database>, Error> {
        Ok(Box::new(T::new(db_path)?))
    }
}

/// The persistence trait. It contains all the methods to interact with the
/// store.
///
/// All the methods are blocking. Callers on the async runtime go through
/// [`Store`](crate::core::store::Store), which runs them on the blocking
/// thread pool with a timeout.
pub trait Database: Sync + Send {
    /// It instantiates a new database driver.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create a database.
    fn new(db_path: &str) -> Result<Self, Error>
    where
        Self: std::marker::Sized;

    // Schema

    /// It generates the database tables. SQL queries are hardcoded in the trait
    /// implementation.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Error` if unable to create own tables.
    fn create_database_tables(&self) -> Result<(), Error>;

    /// It drops the database tables.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop tables.
    fn drop_database_tables(&self) -> Result<(), Error>;

    /// It checks the store answers a query on the cases table.
    ///
    /// # Context: Health
    ///
    /// # Errors
    ///
    /// Will return `Err` if the store is not reachable or the schema is
    /// missing.
    fn ping(&self) -> Result<(), Error>;

    // Users

    /// It loads the user with the given login email, if any.
    ///
    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    /// It inserts a new user. Users are only provisioned by operators.
    ///
    /// # Context: Users
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to insert, for example when the email is
    /// already registered.
    fn add_user(&self, user: &NewUser) -> Result<UserId, Error>;

    // Cases

    /// It registers a new case in `pendiente` status and returns its id.
    ///
    /// # Context: Cases
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to insert, for example when the case number
    /// already exists.
    fn create_case(&self, case: &NewCase) -> Result<CaseId, Error>;

    /// It lists the cases matching the filter, in the order given by the store.
    ///
    /// # Context: Cases
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn list_cases(&self, filter: &CaseFilter) -> Result<Vec<Case>, Error>;

    /// It loads one case.
    ///
    /// # Context: Cases
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_case(&self, case_id: CaseId) -> Result<Option<Case>, Error>;

    /// It records a review decision over a case.
    ///
    /// # Context: Cases
    ///
    /// # Errors
    ///
    /// Will return `Err` if the store rejects the change.
    fn change_case_status(&self, change: &StatusChange) -> Result<(), Error>;

    // Evidence

    /// It registers a new evidence item and returns its id.
    ///
    /// # Context: Evidence
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to insert, for example when the case does
    /// not exist.
    fn create_evidence(&self, evidence: &NewEvidence) -> Result<EvidenceId, Error>;

    /// It lists the evidence items of a case.
    ///
    /// # Context: Evidence
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn list_evidence(&self, case_id: CaseId) -> Result<Vec<Evidence>, Error>;

    /// It loads one evidence item.
    ///
    /// # Context: Evidence
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_evidence(&self, evidence_id: EvidenceId) -> Result<Option<Evidence>, Error>;

    /// It deletes an evidence item. Deleting a missing item is not an error.
    ///
    /// # Context: Evidence
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to delete.
    fn delete_evidence(&self, evidence_id: EvidenceId) -> Result<(), Error>;

    // Reports

    /// It counts the cases registered in the period, grouped by status.
    ///
    /// # Context: Reports
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn case_summary_report(&self, period: &Period) -> Result<Vec<StatusCount>, Error>;

    /// It lists the cases matching the filter for the detail report.
    ///
    /// # Context: Reports
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn case_detail_report(&self, filter: &CaseFilter) -> Result<Vec<Case>, Error>;
}
