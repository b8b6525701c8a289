//! Case services.
//!
//! Review decisions follow this state machine, checked here before the store
//! is asked to apply the change:
//!
//! ```text
//! pendiente ──> aprobado
//! pendiente ──> rechazado
//! aprobado  ──> pendiente
//! rechazado ──> pendiente
//! ```
//!
//! The store stays the final authority and may still reject a change.
use std::panic::Location;
use std::str::FromStr;

use evidence_tracker_primitives::{CaseId, CaseStatus};
use tracing::info;

use crate::core::auth::session::SessionUser;
use crate::core::cases::{Case, CaseFilter, NewCase, StatusChange};
use crate::core::error::Error;
use crate::core::non_blank;
use crate::core::period::Period;
use crate::core::Registry;

/// Parses the optional filters of case listings and reports. Missing or
/// blank values leave the filter open.
///
/// # Errors
///
/// Will return `Error::InvalidDate` or `Error::InvalidStatus` if a supplied
/// filter is not valid.
#[track_caller]
pub fn parse_filter(from: Option<&str>, to: Option<&str>, status: Option<&str>) -> Result<CaseFilter, Error> {
    Ok(CaseFilter {
        period: parse_period(from, to)?,
        status: non_blank(status).map(str::trim).map(parse_status).transpose()?,
    })
}

/// Parses the optional date range of reports.
///
/// # Errors
///
/// Will return `Error::InvalidDate` if a supplied date is not valid.
#[track_caller]
pub fn parse_period(from: Option<&str>, to: Option<&str>) -> Result<Period, Error> {
    Period::parse(non_blank(from), non_blank(to)).map_err(|source| Error::InvalidDate {
        source,
        location: Location::caller(),
    })
}

#[track_caller]
fn parse_status(value: &str) -> Result<CaseStatus, Error> {
    CaseStatus::from_str(value).map_err(|_| Error::InvalidStatus {
        value: value.to_string(),
        location: Location::caller(),
    })
}

/// Registers a new case on behalf of the technician.
///
/// # Errors
///
/// Will return `Error::MissingCaseNumber` if the number is missing or blank,
/// and `Error::Upstream` or `Error::Timeout` if the store fails (for example
/// because the number already exists).
pub async fn create_case(registry: &Registry, number: Option<&str>, technician: &SessionUser) -> Result<CaseId, Error> {
    let Some(number) = non_blank(number) else {
        return Err(Error::MissingCaseNumber {
            location: Location::caller(),
        });
    };

    let new_case = NewCase {
        number: number.to_string(),
        registered_by: technician.id,
    };

    let case_id = registry.store.call(move |database| database.create_case(&new_case)).await?;

    info!(%case_id, user_id = %technician.id, "case registered");

    Ok(case_id)
}

/// Lists the cases matching the filter.
///
/// # Errors
///
/// Will return `Error::Upstream` or `Error::Timeout` if the store fails.
pub async fn list_cases(registry: &Registry, filter: CaseFilter) -> Result<Vec<Case>, Error> {
    registry.store.call(move |database| database.list_cases(&filter)).await
}

/// Loads one case.
///
/// # Errors
///
/// Will return `Error::CaseNotFound` if there is no such case, and
/// `Error::Upstream` or `Error::Timeout` if the store fails.
pub async fn get_case(registry: &Registry, case_id: CaseId) -> Result<Case, Error> {
    registry
        .store
        .call(move |database| database.get_case(case_id))
        .await?
        .ok_or(Error::CaseNotFound {
            case_id,
            location: Location::caller(),
        })
}

/// Records a coordinator's review decision.
///
/// The justification is stored as given, `None` when missing or blank.
///
/// # Errors
///
/// Will return:
///
/// - `Error::InvalidStatus` if the new status is missing or unknown.
/// - `Error::CaseNotFound` if there is no such case.
/// - `Error::IllegalTransition` if the case cannot go to the new status.
/// - `Error::Upstream` or `Error::Timeout` if the store fails.
pub async fn change_status(
    registry: &Registry,
    case_id: CaseId,
    new_status: Option<&str>,
    justification: Option<String>,
    coordinator: &SessionUser,
) -> Result<(), Error> {
    let new_status = parse_status(new_status.unwrap_or_default().trim())?;

    let case = get_case(registry, case_id).await?;

    if !case.status.can_transition_to(new_status) {
        return Err(Error::IllegalTransition {
            case_id,
            from: case.status,
            to: new_status,
            location: Location::caller(),
        });
    }

    let change = StatusChange {
        case_id,
        new_status,
        justification: non_blank(justification),
        acting_user: coordinator.id,
    };

    registry
        .store
        .call(move |database| database.change_case_status(&change))
        .await?;

    info!(%case_id, from = %case.status, to = %new_status, user_id = %coordinator.id, "case reviewed");

    Ok(())
}
