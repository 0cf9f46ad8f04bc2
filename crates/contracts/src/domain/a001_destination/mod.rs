pub mod admin;
pub mod aggregate;
pub mod countries;
pub mod store;

pub use admin::{
    can_delete, classify, delete_destination, filter_and_search, find_by_id, find_by_name,
    request_delete, validate_and_add, validate_and_update, DeleteDecision, DestinationStats,
};
pub use aggregate::{Destination, DestinationDto, DestinationId, DestinationType, DestinationTypeFilter};
pub use countries::{COUNTRIES, NATIONAL_COUNTRY};
pub use store::DestinationStore;
