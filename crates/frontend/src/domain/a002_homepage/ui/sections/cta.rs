use super::super::section_card::SectionCard;
use super::super::state::use_homepage_state;
use super::super::view_model::SectionViewModel;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::notifications::use_notifications;
use contracts::domain::a002_homepage::CtaSection;
use leptos::prelude::*;

#[component]
pub fn CtaEditor(initial: CtaSection) -> impl IntoView {
    let vm = SectionViewModel::new(initial, use_homepage_state(), use_notifications());
    let locked = vm.locked();

    view! {
        <SectionCard vm=vm description="Closing banner inviting visitors to book">
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
                <div class="form__row">
                    <Input
                        label="Primary Button"
                        value=vm.field(|s| s.primary_button.clone())
                        on_input=vm.setter(|s, v| s.primary_button = v)
                        disabled=locked
                    />
                    <Input
                        label="Secondary Button"
                        value=vm.field(|s| s.secondary_button.clone())
                        on_input=vm.setter(|s, v| s.secondary_button = v)
                        disabled=locked
                    />
                </div>
            </div>
        </SectionCard>
    }
}
