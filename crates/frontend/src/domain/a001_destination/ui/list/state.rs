use contracts::domain::a001_destination::DestinationTypeFilter;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DestinationListState {
    pub type_filter: DestinationTypeFilter,
    pub query: String,
}

pub fn create_state() -> RwSignal<DestinationListState> {
    RwSignal::new(DestinationListState::default())
}
