use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{path, StaticSegment};

use super::paths::SHARE_ROUTE_SEGMENTS;

use crate::dev::previews::ComponentPreviews;
use crate::safe::data_sources::ui::page::DataSourcesPage;
use crate::safe::variables::ui::page::VariablesPage;
use crate::safe::variables::ui::viewer::{SharedVariablePage, VariableViewerPage};

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="page page--not-found">"Page not found"</div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/dev/previews") view=ComponentPreviews />
                    <Route path=path!("/:safe/data-sources") view=DataSourcesPage />
                    <Route path=path!("/:safe/variables") view=VariablesPage />
                    <Route path=path!("/:safe/apps") view=VariableViewerPage />
                    <Route
                        path=(
                            StaticSegment(SHARE_ROUTE_SEGMENTS[0]),
                            StaticSegment(SHARE_ROUTE_SEGMENTS[1]),
                        )
                        view=SharedVariablePage
                    />
                </Routes>
            </main>
        </Router>
    }
}
