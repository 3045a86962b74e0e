use crate::{models::Catalog, Result};

/// Where a catalog comes from
///
/// Implementations report any transport or decode failure as
/// `Error::LoadError`. They never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Catalog>;

    /// Human readable origin, used in logs
    fn describe(&self) -> String;
}
