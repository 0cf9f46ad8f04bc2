use crate::domain::a002_homepage::ui::HomePageState;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::AdminShell;
use crate::shared::notifications::NotificationService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    let notify = NotificationService::new();
    provide_context(notify);

    // Section pages share one copy of the homepage document
    let homepage = HomePageState::new();
    provide_context(homepage);
    homepage.load(notify);

    view! {
        <AdminShell />
    }
}
