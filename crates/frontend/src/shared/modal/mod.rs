use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Dialog frame with title, close button and Escape handling
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    /// Extra class on the title, e.g. `modal-title--danger`
    #[prop(optional, into)]
    title_class: MaybeProp<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|e: ev::MouseEvent| e.stop_propagation()>
                <div class="modal-header">
                    <h2 class=move || format!("modal-title {}", title_class.get().unwrap_or_default())>
                        {title}
                    </h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Yes/no dialog for destructive actions
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: String,
    #[prop(into)]
    confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    /// Disable the confirm button while the action runs
    #[prop(optional, into)]
    busy: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <Modal title=title title_class="modal-title--danger" on_close=on_cancel>
            {children()}
            <div class="modal-footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button
                    variant="danger"
                    disabled=busy
                    on_click=Callback::new(move |_| on_confirm.run(()))
                >
                    {confirm_label}
                </Button>
            </div>
        </Modal>
    }
}
