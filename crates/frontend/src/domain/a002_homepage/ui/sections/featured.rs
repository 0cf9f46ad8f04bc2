use super::super::section_card::SectionCard;
use super::super::state::use_homepage_state;
use super::super::view_model::SectionViewModel;
use crate::domain::a003_package::api::HttpPackageCatalog;
use crate::shared::components::ui::{Button, Checkbox, Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::a002_homepage::{resolve_featured, FeaturedPackagesSection};
use contracts::domain::a003_package::{Package, PackageCatalog};
use leptos::prelude::*;

fn package_hint(package: &Package) -> String {
    format!("{} · {}", package.destination, package.price_label())
}

#[component]
fn SelectedPackageRow(
    vm: SectionViewModel<FeaturedPackagesSection>,
    package: Package,
    position: usize,
    last: bool,
) -> impl IntoView {
    let locked = vm.locked();
    let up = package.id.clone();
    let down = package.id.clone();
    let drop = package.id.clone();

    view! {
        <div class="featured-row">
            <span class="featured-row__position">{position + 1}</span>
            <div class="featured-row__info">
                <strong>{package.title.clone()}</strong>
                <span class="text-muted">{package_hint(&package)}</span>
            </div>
            <div class="featured-row__actions">
                <Button
                    variant="ghost"
                    size="sm"
                    disabled=Signal::derive(move || locked.get() || position == 0)
                    on_click=Callback::new(move |_| vm.edit(|s| {
                        s.move_by(&up, -1);
                    }))
                >
                    {icon("chevron-up")}
                </Button>
                <Button
                    variant="ghost"
                    size="sm"
                    disabled=Signal::derive(move || locked.get() || last)
                    on_click=Callback::new(move |_| vm.edit(|s| {
                        s.move_by(&down, 1);
                    }))
                >
                    {icon("chevron-down")}
                </Button>
                <Button
                    variant="ghost"
                    size="sm"
                    class="button--text-danger"
                    disabled=locked
                    on_click=Callback::new(move |_| vm.edit(|s| {
                        s.remove(&drop);
                    }))
                >
                    {icon("x")}
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn FeaturedPackagesEditor(initial: FeaturedPackagesSection) -> impl IntoView {
    let notify = use_notifications();
    let vm = SectionViewModel::new(initial, use_homepage_state(), notify);
    let locked = vm.locked();

    let catalog = RwSignal::new(Vec::<Package>::new());
    let catalog_loading = RwSignal::new(true);
    wasm_bindgen_futures::spawn_local(async move {
        match HttpPackageCatalog.list().await {
            Ok(list) => {
                log::debug!("loaded {} packages", list.len());
                catalog.set(list);
            }
            Err(e) => {
                log::error!("loading packages failed: {}", e);
                notify.error("Failed to load packages. Please try again.");
            }
        }
        catalog_loading.set(false);
    });

    let selected = Memo::new(move |_| {
        catalog.with(|all| vm.with(|s| resolve_featured(s, all).into_iter().cloned().collect::<Vec<_>>()))
    });

    view! {
        <SectionCard vm=vm description="Packages highlighted on the homepage, in display order">
            <div class="form">
                <Input
                    label="Title"
                    value=vm.field(|s| s.title.clone())
                    on_input=vm.setter(|s, v| s.title = v)
                    disabled=locked
                />
                <Textarea
                    label="Description"
                    value=vm.field(|s| s.description.clone())
                    on_input=vm.setter(|s, v| s.description = v)
                    disabled=locked
                />

                <h4>{move || format!("Selected Packages ({})", selected.get().len())}</h4>
                {move || {
                    let rows = selected.get();
                    if rows.is_empty() {
                        return view! { <p class="empty-state">"No packages selected."</p> }.into_any();
                    }
                    let last_index = rows.len() - 1;
                    rows.into_iter()
                        .enumerate()
                        .map(|(position, package)| view! {
                            <SelectedPackageRow vm=vm package=package position=position last=(position == last_index) />
                        })
                        .collect_view()
                        .into_any()
                }}

                <h4>"Available Packages"</h4>
                {move || {
                    if catalog_loading.get() {
                        return view! { <p class="empty-state">"Loading packages..."</p> }.into_any();
                    }
                    let all = catalog.get();
                    if all.is_empty() {
                        return view! { <p class="empty-state">"No packages available."</p> }.into_any();
                    }
                    view! {
                        <div class="package-checklist">
                            <For
                                each=move || all.clone()
                                key=|p| p.id.clone()
                                children=move |p| {
                                    let id = p.id.clone();
                                    let toggle_id = p.id.clone();
                                    view! {
                                        <Checkbox
                                            id=format!("featured-{}", p.id)
                                            label=p.title.clone()
                                            hint=package_hint(&p)
                                            checked=Signal::derive(move || vm.with(|s| s.is_selected(&id)))
                                            on_change=Callback::new(move |_| vm.edit(|s| s.toggle(&toggle_id)))
                                            disabled=locked
                                        />
                                    }
                                }
                            />
                        </div>
                    }.into_any()
                }}
            </div>
        </SectionCard>
    }
}
