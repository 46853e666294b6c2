use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::shared::notifications::{NotificationService, NotificationsHost};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Read-only config for pages; cards get values from pages explicitly.
    provide_context(load_config());

    let notifications = NotificationService::new();
    provide_context(notifications);

    view! {
        <ConfigProvider>
            <AppRoutes />
            <NotificationsHost service=notifications />
        </ConfigProvider>
    }
}
