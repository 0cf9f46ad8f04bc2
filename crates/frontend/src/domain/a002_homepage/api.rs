use async_trait::async_trait;
use contracts::domain::a002_homepage::{
    DocumentContentStore, HomePageContent, HomePageDocumentBackend,
};
use contracts::shared::{AdminError, AdminResult};

use crate::shared::http;

const DOCUMENT: &str = "/api/admin/homepage";

/// `GET` / `PUT /api/admin/homepage`, always the whole document
#[derive(Clone, Copy, Default)]
pub struct HttpHomePageDocument;

#[async_trait(?Send)]
impl HomePageDocumentBackend for HttpHomePageDocument {
    async fn fetch(&self) -> AdminResult<HomePageContent> {
        log::debug!("GET {}", DOCUMENT);
        http::get_json(DOCUMENT).await.map_err(AdminError::operation)
    }

    async fn replace(&self, document: &HomePageContent) -> AdminResult<()> {
        log::debug!("PUT {}", DOCUMENT);
        http::put_json_unit(DOCUMENT, document)
            .await
            .map_err(AdminError::operation)
    }
}

/// Section store of the panel. Section saves are merged into one local
/// document and written whole.
pub type HttpHomePageStore = DocumentContentStore<HttpHomePageDocument>;

pub fn homepage_store() -> HttpHomePageStore {
    DocumentContentStore::new(HttpHomePageDocument)
}
