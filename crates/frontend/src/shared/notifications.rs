//! Transient success/error notifications.
//!
//! ```rust,ignore
//! let notify = use_notifications();
//! notify.success("Destination added successfully!");
//! ```

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// How long a notification stays on screen
pub const NOTIFICATION_LIFETIME_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            Self::Success => "notification notification--success",
            Self::Error => "notification notification--error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "alert-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Ordered list of visible notifications, newest last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove by id; unknown ids are ignored so a late timer is harmless
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Notification service provided in context by `App`
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn show(&self, kind: NotificationKind, message: String) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let queue = self.queue;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_LIFETIME_MS).await;
            queue.update(|q| q.dismiss(id));
        });
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the visible notifications
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notifications">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() role="status">
                            {icon(n.kind.icon())}
                            <span class="notification__message">{n.message}</span>
                            <button
                                class="button button--icon notification__close"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids_and_keeps_order() {
        let mut q = NotificationQueue::default();
        let a = q.push(NotificationKind::Success, "Saved");
        let b = q.push(NotificationKind::Error, "Failed");
        assert!(b > a);
        let messages: Vec<_> = q.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["Saved", "Failed"]);
    }

    #[test]
    fn dismiss_removes_only_that_notification() {
        let mut q = NotificationQueue::default();
        let a = q.push(NotificationKind::Success, "one");
        let b = q.push(NotificationKind::Success, "two");
        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].id, b);

        q.dismiss(a);
        q.dismiss(b);
        assert!(q.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_dismiss() {
        let mut q = NotificationQueue::default();
        let a = q.push(NotificationKind::Error, "x");
        q.dismiss(a);
        let b = q.push(NotificationKind::Error, "y");
        assert_ne!(a, b);
    }
}
