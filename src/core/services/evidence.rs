//! Evidence services.
//!
//! Evidence items live under a case. The owning case always comes from the
//! request path, never from the request body.
use std::panic::Location;

use evidence_tracker_primitives::{CaseId, EvidenceId};
use tracing::info;

use crate::core::error::Error;
use crate::core::evidence::{Evidence, NewEvidence};
use crate::core::non_blank;
use crate::core::Registry;

/// Optional attributes of a new evidence item, as sent by the client.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct EvidenceAttributes {
    pub description: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub weight_in_pounds: Option<String>,
    pub location: Option<String>,
}

/// Registers a new evidence item in the case.
///
/// # Errors
///
/// Will return `Error::MissingEvidenceDescription` if the description is
/// missing or blank, and `Error::Upstream` or `Error::Timeout` if the store
/// fails (for example because the case does not exist).
pub async fn create_evidence(registry: &Registry, case_id: CaseId, attributes: EvidenceAttributes) -> Result<EvidenceId, Error> {
    let Some(description) = non_blank(attributes.description.as_deref()) else {
        return Err(Error::MissingEvidenceDescription {
            location: Location::caller(),
        });
    };

    let new_evidence = NewEvidence::new(
        case_id,
        description,
        attributes.color,
        attributes.size,
        attributes.weight_in_pounds,
        attributes.location,
    );

    let evidence_id = registry
        .store
        .call(move |database| database.create_evidence(&new_evidence))
        .await?;

    info!(%case_id, %evidence_id, "evidence registered");

    Ok(evidence_id)
}

/// Lists the evidence items of a case. An unknown case has no evidence.
///
/// # Errors
///
/// Will return `Error::Upstream` or `Error::Timeout` if the store fails.
pub async fn list_evidence(registry: &Registry, case_id: CaseId) -> Result<Vec<Evidence>, Error> {
    registry.store.call(move |database| database.list_evidence(case_id)).await
}

/// Loads one evidence item.
///
/// # Errors
///
/// Will return `Error::EvidenceNotFound` if there is no such item, and
/// `Error::Upstream` or `Error::Timeout` if the store fails.
pub async fn get_evidence(registry: &Registry, evidence_id: EvidenceId) -> Result<Evidence, Error> {
    registry
        .store
        .call(move |database| database.get_evidence(evidence_id))
        .await?
        .ok_or(Error::EvidenceNotFound {
            evidence_id,
            location: Location::caller(),
        })
}

/// Loads one evidence item of the given case.
///
/// # Errors
///
/// Will return `Error::EvidenceNotFound` if there is no such item or it
/// belongs to another case, and `Error::Upstream` or `Error::Timeout` if the
/// store fails.
pub async fn get_evidence_in_case(registry: &Registry, case_id: CaseId, evidence_id: EvidenceId) -> Result<Evidence, Error> {
    let evidence = get_evidence(registry, evidence_id).await?;

    if evidence.case_id != case_id {
        return Err(Error::EvidenceNotFound {
            evidence_id,
            location: Location::caller(),
        });
    }

    Ok(evidence)
}

/// Deletes an evidence item. Deleting a missing item succeeds.
///
/// # Errors
///
/// Will return `Error::Upstream` or `Error::Timeout` if the store fails.
pub async fn delete_evidence(registry: &Registry, evidence_id: EvidenceId) -> Result<(), Error> {
    registry
        .store
        .call(move |database| database.delete_evidence(evidence_id))
        .await?;

    info!(%evidence_id, "evidence deleted");

    Ok(())
}
