use super::super::section_card::SectionCard;
use super::super::state::use_homepage_state;
use super::super::view_model::SectionViewModel;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::notifications::use_notifications;
use contracts::domain::a002_homepage::{HeroSection, HeroStat};
use leptos::prelude::*;

#[component]
fn HeroStatRow(vm: SectionViewModel<HeroSection>, index: usize) -> impl IntoView {
    let stat = move |pick: fn(&HeroStat) -> String| {
        Signal::derive(move || vm.with(|s| s.stats.get(index).map(pick).unwrap_or_default()))
    };

    view! {
        <div class="stat-editor">
            <Input
                label="Value"
                value=stat(|st| st.value.clone())
                on_input=Callback::new(move |v: String| vm.edit(|s| s.update_stat(index, None, Some(v))))
                disabled=vm.locked()
            />
            <Input
                label="Label"
                value=stat(|st| st.label.clone())
                on_input=Callback::new(move |v: String| vm.edit(|s| s.update_stat(index, Some(v), None)))
                disabled=vm.locked()
            />
        </div>
    }
}

#[component]
pub fn HeroEditor(initial: HeroSection) -> impl IntoView {
    let vm = SectionViewModel::new(initial, use_homepage_state(), use_notifications());
    let locked = vm.locked();
    let background = vm.field(|s| s.background_image.clone());
    let stat_count = Memo::new(move |_| vm.with(|s| s.stats.len()));

    view! {
        <SectionCard vm=vm description="Main banner shown at the top of the homepage">
            <div class="form">
                <Input
                    label="Title"
                    value=vm.field(|s| s.title.clone())
                    on_input=vm.setter(|s, v| s.title = v)
                    disabled=locked
                />
                <Textarea
                    label="Subtitle"
                    value=vm.field(|s| s.subtitle.clone())
                    on_input=vm.setter(|s, v| s.subtitle = v)
                    disabled=locked
                    rows=2
                />
                <Input
                    label="Background Image URL"
                    input_type="url"
                    value=background
                    on_input=vm.setter(|s, v| s.background_image = v)
                    disabled=locked
                />
                {move || {
                    let url = background.get();
                    (!url.is_empty()).then(|| view! {
                        <img class="section-preview" src=url alt="Background preview" />
                    })
                }}
                <div class="form__row">
                    <Input
                        label="Primary Button Text"
                        value=vm.field(|s| s.cta_text.clone())
                        on_input=vm.setter(|s, v| s.cta_text = v)
                        disabled=locked
                    />
                    <Input
                        label="Primary Button Link"
                        value=vm.field(|s| s.cta_link.clone())
                        on_input=vm.setter(|s, v| s.cta_link = v)
                        disabled=locked
                    />
                </div>
                <div class="form__row">
                    <Input
                        label="Video Button Text"
                        value=vm.field(|s| s.watch_video_text.clone())
                        on_input=vm.setter(|s, v| s.watch_video_text = v)
                        disabled=locked
                    />
                    <Input
                        label="Video Link"
                        value=vm.field(|s| s.watch_video_link.clone())
                        on_input=vm.setter(|s, v| s.watch_video_link = v)
                        disabled=locked
                    />
                </div>

                <h4>"Statistics"</h4>
                <div class="stat-editor-grid">
                    {move || (0..stat_count.get())
                        .map(|index| view! { <HeroStatRow vm=vm index=index /> })
                        .collect_view()}
                </div>
            </div>
        </SectionCard>
    }
}
