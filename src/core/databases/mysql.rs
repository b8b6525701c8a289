//! The `MySQL` database driver.
//!
//! Every operation is a `CALL` to the stored procedure that owns its business
//! rules. The schema and the procedures are provisioned by the store owners,
//! so this driver never creates nor drops tables.
//!
//! Result columns are read by name, the order in which a procedure returns
//! them does not matter.
use std::panic::Location;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use evidence_tracker_primitives::{CaseId, CaseStatus, DatabaseDriver, EvidenceId, Role, UserId};
use r2d2::Pool;
use r2d2_mysql::mysql::prelude::{FromValue, Queryable};
use r2d2_mysql::mysql::{Opts, OptsBuilder, Row, Value};
use r2d2_mysql::MySqlConnectionManager;

use super::{Database, Error};
use crate::core::auth::{NewUser, User};
use crate::core::cases::{Case, CaseFilter, NewCase, StatusChange};
use crate::core::evidence::{Evidence, NewEvidence};
use crate::core::period::{parse_store_datetime, Period};
use crate::core::reports::StatusCount;

const DRIVER: DatabaseDriver = DatabaseDriver::MySQL;

pub struct Mysql {
    pool: Pool<MySqlConnectionManager>,
}

impl Database for Mysql {
    /// It instantiates a new `MySQL` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `MySQL` database.
    fn new(db_path: &str) -> Result<Self, Error> {
        let opts = Opts::from_url(db_path)?;
        let builder = OptsBuilder::from_opts(opts);
        let manager = MySqlConnectionManager::new(builder);
        let pool = r2d2::Pool::builder().build(manager).map_err(|e| (e, DRIVER))?;

        Ok(Self { pool })
    }

    /// The schema belongs to the store. Nothing to create.
    ///
    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        Err(Error::Unsupported {
            operation: "drop_database_tables",
            location: Location::caller(),
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::ping`](crate::core::databases::Database::ping).
    fn ping(&self) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop("SELECT COUNT(*) FROM expedientes")?;

        Ok(())
    }

    /// Refer to [`databases::Database::get_user_by_email`](crate::core::databases::Database::get_user_by_email).
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let row = conn.exec_first::<Row, _, _>("CALL sp_usuarios_login(?)", (email,))?;

        row.map(|row| user_from_row(&row)).transpose()
    }

    /// Refer to [`databases::Database::add_user`](crate::core::databases::Database::add_user).
    fn add_user(&self, user: &NewUser) -> Result<UserId, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "INSERT INTO usuarios (nombre, email, rol, password_hash) VALUES (?, ?, ?, ?)",
            (&user.name, &user.email, user.role.as_str(), &user.password_hash),
        )?;

        let id = i64::try_from(conn.last_insert_id()).map_err(|_| Error::InsertFailed {
            location: Location::caller(),
            driver: DRIVER,
        })?;

        Ok(UserId(id))
    }

    /// Refer to [`databases::Database::create_case`](crate::core::databases::Database::create_case).
    fn create_case(&self, case: &NewCase) -> Result<CaseId, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let row = conn.exec_first::<Row, _, _>(
            "CALL sp_expediente_crear(?, ?)",
            (&case.number, case.registered_by.0),
        )?;

        match row {
            Some(row) => Ok(CaseId(column(&row, "id_expediente")?)),
            None => Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            }),
        }
    }

    /// Refer to [`databases::Database::list_cases`](crate::core::databases::Database::list_cases).
    fn list_cases(&self, filter: &CaseFilter) -> Result<Vec<Case>, Error> {
        self.call_case_listing("CALL sp_expediente_listar(?, ?, ?)", filter)
    }

    /// Refer to [`databases::Database::get_case`](crate::core::databases::Database::get_case).
    fn get_case(&self, case_id: CaseId) -> Result<Option<Case>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let row = conn.exec_first::<Row, _, _>("CALL sp_expediente_obtener(?)", (case_id.0,))?;

        row.map(|row| case_from_row(&row)).transpose()
    }

    /// Refer to [`databases::Database::change_case_status`](crate::core::databases::Database::change_case_status).
    fn change_case_status(&self, change: &StatusChange) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(
            "CALL sp_expediente_cambiar_estado(?, ?, ?, ?)",
            (
                change.case_id.0,
                change.new_status.as_str(),
                change.justification.as_deref(),
                change.acting_user.0,
            ),
        )?;

        Ok(())
    }

    /// Refer to [`databases::Database::create_evidence`](crate::core::databases::Database::create_evidence).
    fn create_evidence(&self, evidence: &NewEvidence) -> Result<EvidenceId, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let row = conn.exec_first::<Row, _, _>(
            "CALL sp_indicio_crear(?, ?, ?, ?, ?, ?)",
            (
                evidence.case_id.0,
                &evidence.description,
                evidence.color.as_deref(),
                evidence.size.as_deref(),
                evidence.weight_in_pounds.as_deref(),
                evidence.location.as_deref(),
            ),
        )?;

        match row {
            Some(row) => Ok(EvidenceId(column(&row, "id_indicio")?)),
            None => Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            }),
        }
    }

    /// Refer to [`databases::Database::list_evidence`](crate::core::databases::Database::list_evidence).
    fn list_evidence(&self, case_id: CaseId) -> Result<Vec<Evidence>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let rows = conn.exec::<Row, _, _>("CALL sp_indicio_listar_por_expediente(?)", (case_id.0,))?;

        rows.iter().map(evidence_from_row).collect()
    }

    /// Refer to [`databases::Database::get_evidence`](crate::core::databases::Database::get_evidence).
    fn get_evidence(&self, evidence_id: EvidenceId) -> Result<Option<Evidence>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let row = conn.exec_first::<Row, _, _>("CALL sp_indicio_obtener(?)", (evidence_id.0,))?;

        row.map(|row| evidence_from_row(&row)).transpose()
    }

    /// Refer to [`databases::Database::delete_evidence`](crate::core::databases::Database::delete_evidence).
    fn delete_evidence(&self, evidence_id: EvidenceId) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop("CALL sp_indicio_eliminar(?)", (evidence_id.0,))?;

        Ok(())
    }

    /// Refer to [`databases::Database::case_summary_report`](crate::core::databases::Database::case_summary_report).
    fn case_summary_report(&self, period: &Period) -> Result<Vec<StatusCount>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let rows = conn.exec::<Row, _, _>(
            "CALL sp_reporte_expedientes_resumen(?, ?)",
            (period.from_as_store_value(), period.to_as_store_value()),
        )?;

        rows.iter()
            .map(|row| {
                let status: String = column(row, "estado")?;
                let count: i64 = column(row, "cantidad")?;

                Ok(StatusCount {
                    status: CaseStatus::from_str(&status).map_err(|_| invalid_row("estado"))?,
                    count: u64::try_from(count).map_err(|_| invalid_row("cantidad"))?,
                })
            })
            .collect()
    }

    /// Refer to [`databases::Database::case_detail_report`](crate::core::databases::Database::case_detail_report).
    fn case_detail_report(&self, filter: &CaseFilter) -> Result<Vec<Case>, Error> {
        self.call_case_listing("CALL sp_reporte_expedientes_detalle(?, ?, ?)", filter)
    }
}

impl Mysql {
    fn call_case_listing(&self, procedure: &str, filter: &CaseFilter) -> Result<Vec<Case>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let rows = conn.exec::<Row, _, _>(
            procedure,
            (
                filter.period.from_as_store_value(),
                filter.period.to_as_store_value(),
                filter.status.map(|status| status.as_str()),
            ),
        )?;

        rows.iter().map(case_from_row).collect()
    }
}

#[track_caller]
fn invalid_row(column: &'static str) -> Error {
    Error::InvalidRow {
        column,
        location: Location::caller(),
        driver: DRIVER,
    }
}

#[track_caller]
fn column<T: FromValue>(row: &Row, name: &'static str) -> Result<T, Error> {
    match row.get_opt::<T, _>(name) {
        Some(Ok(value)) => Ok(value),
        Some(Err(_)) | None => Err(invalid_row(name)),
    }
}

#[track_caller]
fn datetime_column(row: &Row, name: &'static str) -> Result<NaiveDateTime, Error> {
    match column::<Value>(row, name)? {
        Value::Date(year, month, day, hour, minute, second, micros) => {
            NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
                .and_then(|date| date.and_hms_micro_opt(u32::from(hour), u32::from(minute), u32::from(second), micros))
                .ok_or_else(|| invalid_row(name))
        }
        Value::Bytes(bytes) => String::from_utf8(bytes)
            .ok()
            .and_then(|text| parse_store_datetime(&text).ok())
            .ok_or_else(|| invalid_row(name)),
        _ => Err(invalid_row(name)),
    }
}

fn user_from_row(row: &Row) -> Result<User, Error> {
    let role: String = column(row, "rol")?;

    Ok(User {
        id: UserId(column(row, "id_usuario")?),
        name: column(row, "nombre")?,
        email: column(row, "email")?,
        role: Role::from_str(&role).map_err(|_| invalid_row("rol"))?,
        password_hash: column(row, "password_hash")?,
    })
}

fn case_from_row(row: &Row) -> Result<Case, Error> {
    let status: String = column(row, "estado")?;

    Ok(Case {
        id: CaseId(column(row, "id_expediente")?),
        number: column(row, "numero_expediente")?,
        status: CaseStatus::from_str(&status).map_err(|_| invalid_row("estado"))?,
        registered_by: UserId(column(row, "id_tecnico_registra")?),
        registered_at: datetime_column(row, "fecha_registro")?,
        justification: optional_column(row, "justificacion_rechazo")?,
    })
}

fn evidence_from_row(row: &Row) -> Result<Evidence, Error> {
    Ok(Evidence {
        id: EvidenceId(column(row, "id_indicio")?),
        case_id: CaseId(column(row, "id_expediente")?),
        description: column(row, "descripcion")?,
        color: optional_column(row, "color")?,
        size: optional_column(row, "tamano")?,
        weight_in_pounds: optional_column(row, "peso_libras")?,
        location: optional_column(row, "ubicacion")?,
        registered_at: datetime_column(row, "fecha_registro")?,
    })
}

/// Nullable text column. A procedure that does not return the column at all
/// is treated as `NULL`.
fn optional_column(row: &Row, name: &'static str) -> Result<Option<String>, Error> {
    match row.get_opt::<Option<String>, _>(name) {
        Some(Ok(value)) => Ok(value),
        Some(Err(_)) => Err(invalid_row(name)),
        None => Ok(None),
    }
}
