//! Store liveness.
use crate::core::error::Error;
use crate::core::Registry;

/// Checks the store answers a query. Connects the store if this is
/// the first call.
///
/// # Errors
///
/// Will return `Error::Upstream` or `Error::Timeout` if the store fails.
pub async fn check_store(registry: &Registry) -> Result<bool, Error> {
    registry.store.call(|database| database.ping()).await?;

    Ok(true)
}
