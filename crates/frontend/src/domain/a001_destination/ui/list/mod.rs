pub mod state;
pub mod view_model;

use self::view_model::DestinationsViewModel;
use crate::domain::a001_destination::ui::details::DestinationForm;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::destination_type_variant;
use crate::shared::components::ui::{Badge, Button, Input, Select};
use crate::shared::icons::icon;
use crate::shared::modal::{ConfirmDialog, Modal};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_LIST};
use contracts::domain::a001_destination::{Destination, DestinationTypeFilter};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

fn filter_options() -> Vec<(String, String)> {
    DestinationTypeFilter::ALL
        .iter()
        .map(|f| (f.as_str().to_string(), f.label().to_string()))
        .collect()
}

#[component]
fn DestinationRow(destination: Destination, vm: DestinationsViewModel) -> impl IntoView {
    let kind = destination.destination_type();
    let for_edit = destination.clone();
    let for_delete = destination.clone();

    view! {
        <div class="destination-row">
            <div class="destination-row__info">
                <div>
                    <h4 class="destination-row__name">{destination.name.clone()}</h4>
                    <p class="destination-row__country">{destination.country.clone()}</p>
                </div>
                <Badge>{format!("{} packages", destination.packages)}</Badge>
                <Badge variant=destination_type_variant(kind)>{kind.label()}</Badge>
            </div>
            <div class="destination-row__actions">
                <Button
                    variant="secondary"
                    size="sm"
                    on_click=Callback::new(move |_| vm.start_edit(for_edit.clone()))
                >
                    {icon("edit")}
                    "Edit"
                </Button>
                <Button
                    variant="ghost"
                    size="sm"
                    class="button--text-danger"
                    on_click=Callback::new(move |_| vm.delete_command(for_delete.clone()))
                >
                    {icon("trash")}
                    "Delete"
                </Button>
            </div>
        </div>
    }
}

/// Destinations management: counters, add/edit form, filtered list and
/// the two delete dialogs.
#[component]
#[allow(non_snake_case)]
pub fn DestinationsPanel() -> impl IntoView {
    let vm = DestinationsViewModel::new(use_notifications());
    vm.load();

    let stats = Memo::new(move |_| vm.stats());
    let busy = Signal::derive(move || vm.busy.get());

    view! {
        <PageFrame page_id=page_id(&Destination::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>{icon("map-pin")} "Destinations Management"</h2>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Destinations"
                        icon_name="globe"
                        value=Signal::derive(move || stats.get().total.to_string())
                    />
                    <StatCard
                        label="National"
                        icon_name="map-pin"
                        value=Signal::derive(move || stats.get().national.to_string())
                    />
                    <StatCard
                        label="International"
                        icon_name="globe"
                        value=Signal::derive(move || stats.get().international.to_string())
                    />
                </div>

                {move || match vm.editing.get() {
                    Some(d) => view! {
                        <DestinationForm
                            title=format!("Edit Destination: {}", d.name)
                            form=vm.edit_form
                            submit_label="Update Destination"
                            on_submit=Callback::new(move |_| vm.update_command())
                            cancel_label="Cancel Edit"
                            on_cancel=Callback::new(move |_| vm.cancel_edit())
                            busy=busy
                        />
                    }.into_any(),
                    None => view! {
                        <DestinationForm
                            title="Add New Destination"
                            form=vm.new_form
                            submit_label="Add Destination"
                            on_submit=Callback::new(move |_| vm.add_command())
                            cancel_label="Reset Form"
                            on_cancel=Callback::new(move |_| vm.reset_forms())
                            busy=busy
                        />
                    }.into_any(),
                }}

                <div class="card">
                    <div class="card__header">
                        <h3>"Existing Destinations"</h3>
                        <div class="filter-bar">
                            <Input
                                placeholder="Search destinations..."
                                value=Signal::derive(move || vm.state.with(|s| s.query.clone()))
                                on_input=Callback::new(move |q: String| vm.state.update(|s| s.query = q))
                            />
                            <Select
                                value=Signal::derive(move || vm.state.with(|s| s.type_filter.as_str().to_string()))
                                options=Signal::derive(filter_options)
                                on_change=Callback::new(move |v: String| {
                                    let filter = v.parse::<DestinationTypeFilter>().unwrap_or_default();
                                    vm.state.update(|s| s.type_filter = filter);
                                })
                            />
                        </div>
                    </div>
                    <div class="card__content">
                        {move || {
                            if vm.loading.get() {
                                return view! { <p class="empty-state">"Loading destinations..."</p> }.into_any();
                            }
                            let rows = vm.visible();
                            if rows.is_empty() {
                                return view! {
                                    <p class="empty-state">"No destinations found for the selected filter."</p>
                                }.into_any();
                            }
                            view! {
                                <div class="destination-list">
                                    <For
                                        each=move || rows.clone()
                                        key=|d| (d.id.clone(), d.name.clone(), d.country.clone(), d.packages)
                                        children=move |d| view! { <DestinationRow destination=d vm=vm /> }
                                    />
                                </div>
                            }.into_any()
                        }}
                    </div>
                </div>
            </div>

            {move || vm.pending_delete.get().map(|d| view! {
                <ConfirmDialog
                    title="Confirm Delete"
                    confirm_label="Delete Destination"
                    on_confirm=Callback::new(move |_| vm.confirm_delete())
                    on_cancel=Callback::new(move |_| vm.cancel_delete())
                    busy=busy
                >
                    <p>"Are you sure you want to delete " <strong>{d.name.clone()}</strong> "?"</p>
                    <p class="text-muted">"This destination is not used in any packages and can be safely deleted."</p>
                    <p class="text-muted">"This action cannot be undone."</p>
                </ConfirmDialog>
            })}

            {move || vm.blocked.get().map(|message| view! {
                <Modal
                    title="Cannot Delete Destination"
                    title_class="modal-title--warning"
                    on_close=Callback::new(move |_| vm.close_blocked())
                >
                    <p>{message}</p>
                    <p class="text-muted">
                        "To delete this destination, you must first remove it from all packages that reference it."
                    </p>
                    <div class="modal-footer">
                        <Button on_click=Callback::new(move |_| vm.close_blocked())>"Understood"</Button>
                    </div>
                </Modal>
            })}
        </PageFrame>
    }
}
