use super::super::section_card::SectionCard;
use super::super::state::use_homepage_state;
use super::super::view_model::SectionViewModel;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::notifications::use_notifications;
use contracts::domain::a002_homepage::{Feature, FeaturePatch, WhyChooseUsSection};
use leptos::prelude::*;

#[component]
fn FeatureRow(vm: SectionViewModel<WhyChooseUsSection>, index: usize) -> impl IntoView {
    let read = move |pick: fn(&Feature) -> String| {
        Signal::derive(move || vm.with(|s| s.features.get(index).map(pick).unwrap_or_default()))
    };
    let apply = move |patch: FeaturePatch| {
        vm.edit(|s| {
            s.update_feature(index, patch);
        })
    };

    view! {
        <div class="feature-editor">
            <span class="feature-editor__index">{format!("Feature {}", index + 1)}</span>
            <Input
                label="Title"
                value=read(|f| f.title.clone())
                on_input=Callback::new(move |v: String| apply(FeaturePatch { title: Some(v), ..Default::default() }))
                disabled=vm.locked()
            />
            <Textarea
                label="Description"
                value=read(|f| f.description.clone())
                on_input=Callback::new(move |v: String| apply(FeaturePatch { description: Some(v), ..Default::default() }))
                disabled=vm.locked()
                rows=2
            />
        </div>
    }
}

#[component]
pub fn WhyChooseUsEditor(initial: WhyChooseUsSection) -> impl IntoView {
    let vm = SectionViewModel::new(initial, use_homepage_state(), use_notifications());
    let locked = vm.locked();
    let feature_count = Memo::new(move |_| vm.with(|s| s.features.len()));

    view! {
        <SectionCard vm=vm description="Reasons to book, shown as feature cards">
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
                <h4>"Features"</h4>
                {move || (0..feature_count.get())
                    .map(|index| view! { <FeatureRow vm=vm index=index /> })
                    .collect_view()}
            </div>
        </SectionCard>
    }
}
