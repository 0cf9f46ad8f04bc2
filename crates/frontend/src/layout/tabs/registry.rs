//! Tab → view. Every page of the panel is reachable from here.

use super::AdminTab;
use crate::domain::a001_destination::ui::list::DestinationsPanel;
use crate::domain::a002_homepage::ui::{HomePageOverview, HomePageSectionPage};
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

pub fn render_tab_content(tab: AdminTab, ctx: AppGlobalContext) -> AnyView {
    match tab {
        AdminTab::Overview => view! {
            <HomePageOverview on_open=Callback::new(move |key| ctx.activate(AdminTab::Section(key))) />
        }
        .into_any(),
        AdminTab::Section(key) => view! { <HomePageSectionPage key=key /> }.into_any(),
        AdminTab::Destinations => view! { <DestinationsPanel /> }.into_any(),
    }
}
