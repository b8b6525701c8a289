//! Report services.
use crate::core::cases::{Case, CaseFilter};
use crate::core::error::Error;
use crate::core::period::Period;
use crate::core::reports::CaseSummary;
use crate::core::Registry;

/// Counts the cases registered in the period, grouped by status. The total
/// is computed here as the sum of the groups.
///
/// # Errors
///
/// Will return `Error::Upstream` or `Error::Timeout` if the store fails.
pub async fn case_summary(registry: &Registry, period: Period) -> Result<CaseSummary, Error> {
    let counts = registry
        .store
        .call(move |database| database.case_summary_report(&period))
        .await?;

    Ok(CaseSummary::from(counts))
}

/// Lists the cases matching the filter.
///
/// # Errors
///
/// Will return `Error::Upstream` or `Error::Timeout` if the store fails.
pub async fn case_detail(registry: &Registry, filter: CaseFilter) -> Result<Vec<Case>, Error> {
    registry.store.call(move |database| database.case_detail_report(&filter)).await
}
