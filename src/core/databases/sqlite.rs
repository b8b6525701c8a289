//! The `SQLite3` database driver.
//!
//! The embedded store implements the behavior of each store procedure in
//! plain SQL: unique case numbers, new cases start as `pendiente`, only the
//! legal review transitions are applied and evidence items must belong to an
//! existing case.
use std::panic::Location;
use std::str::FromStr;

use evidence_tracker_primitives::{CaseId, CaseStatus, DatabaseDriver, EvidenceId, Role, UserId};
use r2d2::Pool;
use r2d2_sqlite::rusqlite::{params, Row};
use r2d2_sqlite::SqliteConnectionManager;

use super::{Database, Error};
use crate::core::auth::{NewUser, User};
use crate::core::cases::{Case, CaseFilter, NewCase, StatusChange};
use crate::core::evidence::{Evidence, NewEvidence};
use crate::core::period::{parse_store_datetime, Period};
use crate::core::reports::StatusCount;

const DRIVER: DatabaseDriver = DatabaseDriver::Sqlite3;

const SELECT_CASES: &str = "
    SELECT id_expediente, numero_expediente, estado, id_tecnico_registra, fecha_registro, justificacion_rechazo
    FROM expedientes
    WHERE (?1 IS NULL OR fecha_registro >= ?1)
      AND (?2 IS NULL OR fecha_registro <= ?2)
      AND (?3 IS NULL OR estado = ?3)
    ORDER BY fecha_registro DESC, id_expediente DESC";

const SELECT_EVIDENCE: &str = "
    SELECT id_indicio, id_expediente, descripcion, color, tamano, peso_libras, ubicacion, fecha_registro
    FROM indicios";

pub struct Sqlite {
    pool: Pool<SqliteConnectionManager>,
}

impl Database for Sqlite {
    /// It instantiates a new `SQLite3` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `SqLite` database.
    fn new(db_path: &str) -> Result<Sqlite, Error> {
        let cm = SqliteConnectionManager::file(db_path).with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
        Pool::new(cm).map_or_else(|err| Err((err, DRIVER).into()), |pool| Ok(Sqlite { pool }))
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_users_table = "
        CREATE TABLE IF NOT EXISTS usuarios (
            id_usuario INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            rol TEXT NOT NULL CHECK (rol IN ('tecnico', 'coordinador')),
            password_hash TEXT NOT NULL
        );"
        .to_string();

        let create_cases_table = "
        CREATE TABLE IF NOT EXISTS expedientes (
            id_expediente INTEGER PRIMARY KEY AUTOINCREMENT,
            numero_expediente TEXT NOT NULL UNIQUE,
            estado TEXT NOT NULL DEFAULT 'pendiente' CHECK (estado IN ('pendiente', 'aprobado', 'rechazado')),
            id_tecnico_registra INTEGER NOT NULL REFERENCES usuarios (id_usuario),
            fecha_registro TEXT NOT NULL DEFAULT (datetime('now')),
            justificacion_rechazo TEXT,
            id_usuario_accion INTEGER REFERENCES usuarios (id_usuario)
        );"
        .to_string();

        let create_evidence_table = "
        CREATE TABLE IF NOT EXISTS indicios (
            id_indicio INTEGER PRIMARY KEY AUTOINCREMENT,
            id_expediente INTEGER NOT NULL REFERENCES expedientes (id_expediente) ON DELETE CASCADE,
            descripcion TEXT NOT NULL,
            color TEXT,
            tamano TEXT,
            peso_libras TEXT,
            ubicacion TEXT,
            fecha_registro TEXT NOT NULL DEFAULT (datetime('now'))
        );"
        .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&create_users_table, [])?;
        conn.execute(&create_cases_table, [])?;
        conn.execute(&create_evidence_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_evidence_table = "
        DROP TABLE indicios;"
            .to_string();

        let drop_cases_table = "
        DROP TABLE expedientes;"
            .to_string();

        let drop_users_table = "
        DROP TABLE usuarios;"
            .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&drop_evidence_table, [])
            .and_then(|_| conn.execute(&drop_cases_table, []))
            .and_then(|_| conn.execute(&drop_users_table, []))?;

        Ok(())
    }

    /// Refer to [`databases::Database::ping`](crate::core::databases::Database::ping).
    fn ping(&self) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_row("SELECT COUNT(*) FROM expedientes", [], |row| row.get::<_, i64>(0))?;

        Ok(())
    }

    /// Refer to [`databases::Database::get_user_by_email`](crate::core::databases::Database::get_user_by_email).
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT id_usuario, nombre, email, rol, password_hash FROM usuarios WHERE email = ?1")?;

        let mut rows = stmt.query([email])?;

        match rows.next()? {
            Some(row) => Ok(Some(user_from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Refer to [`databases::Database::add_user`](crate::core::databases::Database::add_user).
    fn add_user(&self, user: &NewUser) -> Result<UserId, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO usuarios (nombre, email, rol, password_hash) VALUES (?1, ?2, ?3, ?4)",
            params![user.name, user.email, user.role.as_str(), user.password_hash],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(UserId(conn.last_insert_rowid()))
        }
    }

    /// Refer to [`databases::Database::create_case`](crate::core::databases::Database::create_case).
    fn create_case(&self, case: &NewCase) -> Result<CaseId, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO expedientes (numero_expediente, id_tecnico_registra) VALUES (?1, ?2)",
            params![case.number, case.registered_by.0],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(CaseId(conn.last_insert_rowid()))
        }
    }

    /// Refer to [`databases::Database::list_cases`](crate::core::databases::Database::list_cases).
    fn list_cases(&self, filter: &CaseFilter) -> Result<Vec<Case>, Error> {
        self.select_cases(filter)
    }

    /// Refer to [`databases::Database::get_case`](crate::core::databases::Database::get_case).
    fn get_case(&self, case_id: CaseId) -> Result<Option<Case>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT id_expediente, numero_expediente, estado, id_tecnico_registra, fecha_registro, justificacion_rechazo
             FROM expedientes WHERE id_expediente = ?1",
        )?;

        let mut rows = stmt.query([case_id.0])?;

        match rows.next()? {
            Some(row) => Ok(Some(case_from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Refer to [`databases::Database::change_case_status`](crate::core::databases::Database::change_case_status).
    fn change_case_status(&self, change: &StatusChange) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let updated = conn.execute(
            "UPDATE expedientes
             SET estado = ?2, justificacion_rechazo = ?3, id_usuario_accion = ?4
             WHERE id_expediente = ?1
               AND ((estado = 'pendiente' AND ?2 IN ('aprobado', 'rechazado'))
                 OR (estado IN ('aprobado', 'rechazado') AND ?2 = 'pendiente'))",
            params![
                change.case_id.0,
                change.new_status.as_str(),
                change.justification,
                change.acting_user.0
            ],
        )?;

        if updated == 0 {
            return Err(Error::UpdateFailed {
                location: Location::caller(),
                driver: DRIVER,
            });
        }

        Ok(())
    }

    /// Refer to [`databases::Database::create_evidence`](crate::core::databases::Database::create_evidence).
    fn create_evidence(&self, evidence: &NewEvidence) -> Result<EvidenceId, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO indicios (id_expediente, descripcion, color, tamano, peso_libras, ubicacion)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                evidence.case_id.0,
                evidence.description,
                evidence.color,
                evidence.size,
                evidence.weight_in_pounds,
                evidence.location
            ],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(EvidenceId(conn.last_insert_rowid()))
        }
    }

    /// Refer to [`databases::Database::list_evidence`](crate::core::databases::Database::list_evidence).
    fn list_evidence(&self, case_id: CaseId) -> Result<Vec<Evidence>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(&format!("{SELECT_EVIDENCE} WHERE id_expediente = ?1 ORDER BY id_indicio"))?;

        let mut rows = stmt.query([case_id.0])?;

        let mut evidence = vec![];

        while let Some(row) = rows.next()? {
            evidence.push(evidence_from_row(row)?);
        }

        Ok(evidence)
    }

    /// Refer to [`databases::Database::get_evidence`](crate::core::databases::Database::get_evidence).
    fn get_evidence(&self, evidence_id: EvidenceId) -> Result<Option<Evidence>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(&format!("{SELECT_EVIDENCE} WHERE id_indicio = ?1"))?;

        let mut rows = stmt.query([evidence_id.0])?;

        match rows.next()? {
            Some(row) => Ok(Some(evidence_from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Refer to [`databases::Database::delete_evidence`](crate::core::databases::Database::delete_evidence).
    fn delete_evidence(&self, evidence_id: EvidenceId) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute("DELETE FROM indicios WHERE id_indicio = ?1", [evidence_id.0])?;

        Ok(())
    }

    /// Refer to [`databases::Database::case_summary_report`](crate::core::databases::Database::case_summary_report).
    fn case_summary_report(&self, period: &Period) -> Result<Vec<StatusCount>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(
            "SELECT estado, COUNT(*) AS cantidad
             FROM expedientes
             WHERE (?1 IS NULL OR fecha_registro >= ?1)
               AND (?2 IS NULL OR fecha_registro <= ?2)
             GROUP BY estado
             ORDER BY estado",
        )?;

        let mut rows = stmt.query(params![period.from_as_store_value(), period.to_as_store_value()])?;

        let mut counts = vec![];

        while let Some(row) = rows.next()? {
            let status: String = row.get(0)?;
            let count: i64 = row.get(1)?;

            counts.push(StatusCount {
                status: CaseStatus::from_str(&status).map_err(|_| invalid_row("estado"))?,
                count: u64::try_from(count).map_err(|_| invalid_row("cantidad"))?,
            });
        }

        Ok(counts)
    }

    /// Refer to [`databases::Database::case_detail_report`](crate::core::databases::Database::case_detail_report).
    fn case_detail_report(&self, filter: &CaseFilter) -> Result<Vec<Case>, Error> {
        self.select_cases(filter)
    }
}

impl Sqlite {
    fn select_cases(&self, filter: &CaseFilter) -> Result<Vec<Case>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(SELECT_CASES)?;

        let mut rows = stmt.query(params![
            filter.period.from_as_store_value(),
            filter.period.to_as_store_value(),
            filter.status.map(|status| status.as_str())
        ])?;

        let mut cases = vec![];

        while let Some(row) = rows.next()? {
            cases.push(case_from_row(row)?);
        }

        Ok(cases)
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

fn user_from_row(row: &Row<'_>) -> Result<User, Error> {
    let role: String = row.get(3)?;

    Ok(User {
        id: UserId(row.get(0)?),
        name: row.get(1)?,
        email: row.get(2)?,
        role: Role::from_str(&role).map_err(|_| invalid_row("rol"))?,
        password_hash: row.get(4)?,
    })
}

fn case_from_row(row: &Row<'_>) -> Result<Case, Error> {
    let status: String = row.get(2)?;
    let registered_at: String = row.get(4)?;

    Ok(Case {
        id: CaseId(row.get(0)?),
        number: row.get(1)?,
        status: CaseStatus::from_str(&status).map_err(|_| invalid_row("estado"))?,
        registered_by: UserId(row.get(3)?),
        registered_at: parse_store_datetime(&registered_at).map_err(|_| invalid_row("fecha_registro"))?,
        justification: row.get(5)?,
    })
}

fn evidence_from_row(row: &Row<'_>) -> Result<Evidence, Error> {
    let registered_at: String = row.get(7)?;

    Ok(Evidence {
        id: EvidenceId(row.get(0)?),
        case_id: CaseId(row.get(1)?),
        description: row.get(2)?,
        color: row.get(3)?,
        size: row.get(4)?,
        weight_in_pounds: row.get(5)?,
        location: row.get(6)?,
        registered_at: parse_store_datetime(&registered_at).map_err(|_| invalid_row("fecha_registro"))?,
    })
}
