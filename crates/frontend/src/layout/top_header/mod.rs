//! TopHeader, the title bar above the tab strip.

use crate::layout::global_context::use_global_context;
use crate::layout::tabs::AdminTab;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Admin Panel"</span>
                <span class="top-header__subtitle">"Manage homepage content and destinations"</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__current">{move || ctx.active.get().label()}</span>
                <button
                    class="top-header__icon-btn"
                    title="Back to overview"
                    on:click=move |_| ctx.activate(AdminTab::Overview)
                >
                    "Overview"
                </button>
            </div>
        </div>
    }
}
