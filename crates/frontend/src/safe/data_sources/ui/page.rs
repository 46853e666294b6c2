use leptos::prelude::*;

use super::list::DataSourcesTable;
use crate::shared::config::AppConfig;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn DataSourcesPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    view! {
        <PageFrame page_id="safe_data_sources--list" category=PAGE_CAT_LIST>
            <DataSourcesTable
                api_port=config.api.port
                fallback_logo=config.assets.fallback_logo.clone()
            />
        </PageFrame>
    }
}
