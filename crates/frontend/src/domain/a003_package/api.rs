use async_trait::async_trait;
use contracts::domain::a003_package::{Package, PackageCatalog};
use contracts::shared::{AdminError, AdminResult};

use crate::shared::http;

/// Read-only package catalog, `GET /api/packages`
#[derive(Clone, Copy, Default)]
pub struct HttpPackageCatalog;

#[async_trait(?Send)]
impl PackageCatalog for HttpPackageCatalog {
    async fn list(&self) -> AdminResult<Vec<Package>> {
        http::get_json("/api/packages")
            .await
            .map_err(AdminError::operation)
    }
}
