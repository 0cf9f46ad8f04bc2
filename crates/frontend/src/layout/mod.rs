pub mod global_context;
pub mod tabs;
pub mod top_header;

use crate::shared::icons::icon;
use crate::shared::notifications::NotificationHost;
use global_context::use_global_context;
use leptos::prelude::*;
use tabs::{render_tab_content, AdminTab};
use top_header::TopHeader;

/// Admin shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// | Overview | Hero | ... | Destinations     |
/// +------------------------------------------+
/// |              active tab                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn AdminShell() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-layout">
            <TopHeader />
            <nav class="tab-strip" role="tablist">
                {AdminTab::all()
                    .into_iter()
                    .map(|tab| {
                        let class = move || {
                            if ctx.active.get() == tab {
                                "tab-strip__tab tab-strip__tab--active"
                            } else {
                                "tab-strip__tab"
                            }
                        };
                        view! {
                            <button
                                class=class
                                role="tab"
                                aria-selected=move || (ctx.active.get() == tab).to_string()
                                on:click=move |_| ctx.activate(tab)
                            >
                                {icon(tab.icon())}
                                <span>{tab.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <main class="app-main">
                {move || render_tab_content(ctx.active.get(), ctx)}
            </main>
            <NotificationHost />
        </div>
    }
}
