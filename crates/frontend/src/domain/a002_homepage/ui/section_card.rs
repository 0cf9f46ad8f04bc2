use super::view_model::SectionViewModel;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a002_homepage::{HomePageContent, HomePageSection};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

/// Frame of a section page: header with Edit / Save / Cancel and the
/// last save error.
#[component]
pub fn SectionCard<T>(
    vm: SectionViewModel<T>,
    #[prop(into)]
    description: String,
    children: Children,
) -> impl IntoView
where
    T: HomePageSection + Send + Sync,
{
    let editing = vm.is_editing();
    let saving = vm.is_saving();
    let error = Signal::derive(move || vm.editor.with(|e| e.error().map(str::to_string)));
    let entity = format!("{}_{}", HomePageContent::full_name(), T::KEY.as_str());

    view! {
        <PageFrame page_id=page_id(&entity, PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="page__header section-card__header">
                <div>
                    <h2>{T::KEY.label()}</h2>
                    <p class="text-muted">{description}</p>
                </div>
                <div class="section-card__actions">
                    {move || if editing.get() || saving.get() {
                        view! {
                            <Button
                                disabled=saving
                                on_click=Callback::new(move |_| vm.save_command())
                            >
                                {icon("save")}
                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                            </Button>
                            <Button
                                variant="secondary"
                                disabled=saving
                                on_click=Callback::new(move |_| vm.cancel())
                            >
                                {icon("x")}
                                "Cancel"
                            </Button>
                        }.into_any()
                    } else {
                        view! {
                            <Button on_click=Callback::new(move |_| vm.begin_edit())>
                                {icon("edit")}
                                "Edit"
                            </Button>
                        }.into_any()
                    }}
                </div>
            </div>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <div class="page__content section-card__content">
                {children()}
            </div>
        </PageFrame>
    }
}
