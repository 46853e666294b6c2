//! In-app notifications (toasts).
//!
//! [`NotificationService`] is provided through context by `App` and passed
//! explicitly into components that raise notifications. [`NotificationsHost`]
//! renders the queue; every entry is dismissed after its `auto_hide_ms`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::shared::icons::icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationVariant {
    fn class(&self) -> &'static str {
        match self {
            NotificationVariant::Success => "notification notification--success",
            NotificationVariant::Info => "notification notification--info",
            NotificationVariant::Warning => "notification notification--warning",
            NotificationVariant::Error => "notification notification--error",
        }
    }
}

/// Static description of a notification kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationSpec {
    pub message: &'static str,
    pub variant: NotificationVariant,
    /// Do not enqueue while an identical message is still visible
    pub prevent_duplicate: bool,
    pub auto_hide_ms: u32,
}

pub const SHARE_SAFE_VARIABLE_URL_COPIED: NotificationSpec = NotificationSpec {
    message: "Safe Variable URL copied to clipboard!",
    variant: NotificationVariant::Info,
    prevent_duplicate: true,
    auto_hide_ms: 3000,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub spec: NotificationSpec,
}

/// Seam for anything that can show a notification.
pub trait Notifier {
    fn show_notification(&self, spec: &NotificationSpec);
}

/// Push onto the queue, honouring `prevent_duplicate`.
/// Returns the id of the new entry, `None` if it was suppressed.
pub fn push_notification(queue: &mut Vec<Notification>, spec: &NotificationSpec) -> Option<Uuid> {
    if spec.prevent_duplicate && queue.iter().any(|n| n.spec.message == spec.message) {
        return None;
    }
    let id = Uuid::new_v4();
    queue.push(Notification { id, spec: *spec });
    Some(id)
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(Vec::new()),
        }
    }

    pub fn enqueue(&self, spec: &NotificationSpec) -> Option<Uuid> {
        let id = self
            .queue
            .try_update(|q| push_notification(q, spec))
            .flatten()?;
        log::debug!("Notification {}: {}", id, spec.message);

        let queue = self.queue;
        let delay = spec.auto_hide_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            queue.try_update(|q| q.retain(|n| n.id != id));
        });
        Some(id)
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.update(|q| q.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        let queue = self.queue;
        Signal::derive(move || queue.get())
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationService {
    fn show_notification(&self, spec: &NotificationSpec) {
        self.enqueue(spec);
    }
}

#[component]
pub fn NotificationsHost(service: NotificationService) -> impl IntoView {
    let items = service.items();

    view! {
        <div class="notifications" role="status" aria-live="polite">
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|n| {
                        let id = n.id;
                        view! {
                            <div class=n.spec.variant.class()>
                                <span class="notification__message">{n.spec.message}</span>
                                <button
                                    type="button"
                                    class="notification__close"
                                    aria-label="Close notification"
                                    on:click=move |_| service.dismiss(id)
                                >
                                    {icon("close")}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
