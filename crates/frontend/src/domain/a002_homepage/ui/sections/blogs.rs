use super::super::section_card::SectionCard;
use super::super::state::use_homepage_state;
use super::super::view_model::SectionViewModel;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::notifications::use_notifications;
use contracts::domain::a002_homepage::aggregate::POSTS_TO_SHOW_CHOICES;
use contracts::domain::a002_homepage::LatestBlogsSection;
use leptos::prelude::*;

fn posts_options() -> Vec<(String, String)> {
    POSTS_TO_SHOW_CHOICES
        .iter()
        .map(|n| (n.to_string(), format!("{} Posts", n)))
        .collect()
}

#[component]
pub fn LatestBlogsEditor(initial: LatestBlogsSection) -> impl IntoView {
    let vm = SectionViewModel::new(initial, use_homepage_state(), use_notifications());
    let locked = vm.locked();

    view! {
        <SectionCard vm=vm description="Heading of the blog strip and how many posts it shows">
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
                <Select
                    label="Posts to Show"
                    value=vm.field(|s| s.posts_to_show.to_string())
                    options=Signal::derive(posts_options)
                    on_change=Callback::new(move |v: String| {
                        if let Ok(n) = v.parse::<u32>() {
                            vm.edit(|s| s.posts_to_show = n);
                        }
                    })
                    disabled=locked
                />
            </div>
        </SectionCard>
    }
}
