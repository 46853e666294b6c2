use crate::shared::icons::icon;
use leptos::prelude::*;

/// Single-level breadcrumb shown in the page menu bar.
#[component]
pub fn BreadcrumbHeader(
    #[prop(into)]
    text: String,
    /// Icon name from the icon() helper
    #[prop(optional)]
    icon_name: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="page-menu">
            <nav class="breadcrumb" aria-label="breadcrumb">
                <span class="breadcrumb__element">
                    {icon_name.map(|name| view! { <span class="breadcrumb__icon">{icon(name)}</span> })}
                    <span class="breadcrumb__text">{text}</span>
                </span>
            </nav>
        </div>
    }
}
