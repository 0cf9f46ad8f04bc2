use async_trait::async_trait;
use contracts::domain::a001_destination::{Destination, DestinationDto, DestinationId, DestinationStore};
use contracts::shared::{AdminError, AdminResult};

use crate::shared::api_utils::path_segment;
use crate::shared::http;

const COLLECTION: &str = "/api/destinations";

/// `DestinationStore` backed by the REST backend
#[derive(Clone, Copy, Default)]
pub struct HttpDestinationStore;

impl HttpDestinationStore {
    fn item_path(id: &DestinationId) -> String {
        format!("{}/{}", COLLECTION, path_segment(id.value()))
    }
}

#[async_trait(?Send)]
impl DestinationStore for HttpDestinationStore {
    async fn list(&self) -> AdminResult<Vec<Destination>> {
        log::debug!("GET {}", COLLECTION);
        http::get_json(COLLECTION).await.map_err(AdminError::operation)
    }

    async fn create(&self, input: &DestinationDto) -> AdminResult<Destination> {
        log::debug!("POST {} {}", COLLECTION, input.name);
        http::post_json(COLLECTION, input)
            .await
            .map_err(AdminError::operation)
    }

    async fn update(&self, destination: &Destination) -> AdminResult<Destination> {
        let path = Self::item_path(&destination.id);
        log::debug!("PUT {}", path);
        http::put_json(&path, &destination.to_dto())
            .await
            .map_err(AdminError::operation)
    }

    async fn delete(&self, id: &DestinationId) -> AdminResult<()> {
        let path = Self::item_path(id);
        log::debug!("DELETE {}", path);
        http::delete(&path).await.map_err(AdminError::operation)
    }
}
