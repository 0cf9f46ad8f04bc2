use async_trait::async_trait;

use super::aggregate::Package;
use crate::shared::AdminResult;

/// Read-only view of the package catalog
#[async_trait(?Send)]
pub trait PackageCatalog {
    async fn list(&self) -> AdminResult<Vec<Package>>;
}
