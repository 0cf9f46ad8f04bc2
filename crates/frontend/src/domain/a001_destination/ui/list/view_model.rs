use super::state::{create_state, DestinationListState};
use crate::domain::a001_destination::api::HttpDestinationStore;
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_destination::{
    delete_destination, filter_and_search, request_delete, validate_and_add, validate_and_update,
    DeleteDecision, Destination, DestinationDto, DestinationStats, DestinationStore,
};
use contracts::shared::AdminError;
use leptos::prelude::*;

/// Text for a failed write; store failures name the action
pub fn failure_message(err: &AdminError, action: &str) -> String {
    match err {
        AdminError::Operation(_) => format!("Failed to {} destination. Please try again.", action),
        other => other.user_message(),
    }
}

/// ViewModel of the destinations panel
#[derive(Clone, Copy)]
pub struct DestinationsViewModel {
    pub items: RwSignal<Vec<Destination>>,
    pub loading: RwSignal<bool>,
    pub busy: RwSignal<bool>,
    pub state: RwSignal<DestinationListState>,
    /// Add form
    pub new_form: RwSignal<DestinationDto>,
    /// Record being edited and its form buffer
    pub editing: RwSignal<Option<Destination>>,
    pub edit_form: RwSignal<DestinationDto>,
    /// Unused destination waiting for delete confirmation
    pub pending_delete: RwSignal<Option<Destination>>,
    /// Explanation shown when a delete is refused
    pub blocked: RwSignal<Option<String>>,
    notify: NotificationService,
}

impl DestinationsViewModel {
    pub fn new(notify: NotificationService) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            busy: RwSignal::new(false),
            state: create_state(),
            new_form: RwSignal::new(DestinationDto::default()),
            editing: RwSignal::new(None),
            edit_form: RwSignal::new(DestinationDto::default()),
            pending_delete: RwSignal::new(None),
            blocked: RwSignal::new(None),
            notify,
        }
    }

    /// Rows after type filter and search
    pub fn visible(&self) -> Vec<Destination> {
        let state = self.state.get();
        self.items
            .with(|items| filter_and_search(items, state.type_filter, &state.query))
    }

    pub fn stats(&self) -> DestinationStats {
        self.items.with(|items| DestinationStats::from_list(items))
    }

    pub fn load(&self) {
        let this = *self;
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match HttpDestinationStore.list().await {
                Ok(list) => {
                    log::debug!("loaded {} destinations", list.len());
                    this.items.set(list);
                }
                Err(e) => {
                    log::error!("loading destinations failed: {}", e);
                    this.notify.error("Failed to load destinations. Please try again.");
                }
            }
            this.loading.set(false);
        });
    }

    pub fn add_command(&self) {
        if self.busy.get_untracked() {
            return;
        }
        let this = *self;
        let candidate = self.new_form.get_untracked();
        let existing = self.items.get_untracked();
        this.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match validate_and_add(&HttpDestinationStore, &candidate, &existing).await {
                Ok(created) => {
                    this.items.update(|items| items.push(created));
                    this.new_form.set(DestinationDto::default());
                    this.notify.success("Destination added successfully!");
                }
                Err(e) => this.report(&e, "add"),
            }
            this.busy.set(false);
        });
    }

    pub fn start_edit(&self, destination: Destination) {
        self.edit_form.set(destination.to_dto());
        self.editing.set(Some(destination));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.edit_form.set(DestinationDto::default());
    }

    pub fn update_command(&self) {
        if self.busy.get_untracked() {
            return;
        }
        let Some(mut edited) = self.editing.get_untracked() else {
            return;
        };
        edited.apply(&self.edit_form.get_untracked());
        let existing = self.items.get_untracked();

        let this = *self;
        this.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match validate_and_update(&HttpDestinationStore, &edited, &existing).await {
                Ok(updated) => {
                    this.items.update(|items| {
                        if let Some(slot) = items.iter_mut().find(|d| d.id == updated.id) {
                            *slot = updated;
                        }
                    });
                    this.cancel_edit();
                    this.notify.success("Destination updated successfully!");
                }
                Err(e) => this.report(&e, "update"),
            }
            this.busy.set(false);
        });
    }

    /// Clear both forms
    pub fn reset_forms(&self) {
        self.new_form.set(DestinationDto::default());
        self.cancel_edit();
    }

    /// Delete button: ask for confirmation or explain why it is refused
    pub fn delete_command(&self, destination: Destination) {
        match request_delete(&destination) {
            DeleteDecision::Confirm => self.pending_delete.set(Some(destination)),
            DeleteDecision::Blocked { message } => {
                log::debug!("delete of {} blocked", destination.id);
                self.blocked.set(Some(message));
            }
        }
    }

    pub fn confirm_delete(&self) {
        if self.busy.get_untracked() {
            return;
        }
        let Some(target) = self.pending_delete.get_untracked() else {
            return;
        };
        let this = *self;
        this.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match delete_destination(&HttpDestinationStore, &target).await {
                Ok(()) => {
                    this.items.update(|items| items.retain(|d| d.id != target.id));
                    this.notify.success("Destination deleted successfully!");
                }
                Err(e) => this.report(&e, "delete"),
            }
            this.pending_delete.set(None);
            this.busy.set(false);
        });
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn close_blocked(&self) {
        self.blocked.set(None);
    }

    fn report(&self, err: &AdminError, action: &str) {
        if err.is_expected() {
            log::warn!("{} destination: {}", action, err);
        } else {
            log::error!("{} destination: {}", action, err);
        }
        self.notify.error(failure_message(err, action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_name_the_action() {
        let err = AdminError::operation("HTTP 500");
        assert_eq!(
            failure_message(&err, "add"),
            "Failed to add destination. Please try again."
        );
    }

    #[test]
    fn input_errors_keep_their_own_text() {
        let dup = AdminError::Duplicate {
            name: "Bali".into(),
            country: "Indonesia".into(),
        };
        assert_eq!(failure_message(&dup, "add"), "This destination already exists");

        let missing = AdminError::validation("Please fill in all required fields");
        assert_eq!(
            failure_message(&missing, "update"),
            "Please fill in all required fields"
        );
    }
}
