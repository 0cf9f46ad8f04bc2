use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::icons::icon;
use contracts::domain::a001_destination::{DestinationDto, DestinationType, COUNTRIES};
use leptos::prelude::*;

fn country_options() -> Vec<(String, String)> {
    COUNTRIES
        .iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect()
}

/// Name + country form used both for adding and for editing a destination
#[component]
pub fn DestinationForm(
    #[prop(into)]
    title: String,
    form: RwSignal<DestinationDto>,
    #[prop(into)]
    submit_label: String,
    on_submit: Callback<()>,
    /// "Cancel Edit" when editing, "Reset Form" when adding
    #[prop(into)]
    cancel_label: String,
    on_cancel: Callback<()>,
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    let type_hint = move || {
        let country = form.with(|f| f.country.clone());
        (!country.is_empty()).then(|| {
            format!(
                "Will be listed as {}",
                DestinationType::of_country(&country).label()
            )
        })
    };

    view! {
        <form
            class="details-form destination-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h3 class="details-form__title">{title}</h3>
            <div class="form__row">
                <Input
                    label="Destination Name"
                    id="destination-name"
                    required=true
                    placeholder="e.g. Bali"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                />
                <Select
                    label="Country"
                    id="destination-country"
                    required=true
                    placeholder="Select country"
                    value=Signal::derive(move || form.with(|f| f.country.clone()))
                    options=Signal::derive(country_options)
                    on_change=Callback::new(move |v: String| form.update(|f| f.country = v))
                />
            </div>
            {move || type_hint().map(|h| view! { <p class="form__hint">{h}</p> })}
            <div class="details-actions">
                <Button button_type="submit" disabled=busy>
                    {icon("save")}
                    {submit_label}
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    {cancel_label}
                </Button>
            </div>
        </form>
    }
}
