//! Destination store abstraction

use async_trait::async_trait;

use super::aggregate::{Destination, DestinationDto, DestinationId};
use crate::shared::AdminResult;

/// Canonical list of destinations, owned by the backend.
///
/// Implementations:
/// - frontend: `HttpDestinationStore` (REST backend)
/// - tests: in-memory mock
#[async_trait(?Send)]
pub trait DestinationStore {
    /// Get all destinations in store order
    async fn list(&self) -> AdminResult<Vec<Destination>>;

    /// Create a destination, the store assigns the id and a zero usage counter
    async fn create(&self, input: &DestinationDto) -> AdminResult<Destination>;

    /// Replace name and country of an existing destination
    async fn update(&self, destination: &Destination) -> AdminResult<Destination>;

    /// Remove a destination
    async fn delete(&self, id: &DestinationId) -> AdminResult<()>;
}
