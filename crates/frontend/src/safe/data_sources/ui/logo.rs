use leptos::prelude::*;

use crate::safe::CardSize;
use crate::shared::image_fallback::FallbackImage;

/// Edge of the square connector logo, px.
pub fn connector_logo_px(size: CardSize) -> u32 {
    match size {
        CardSize::Md => 60,
        CardSize::Lg => 112,
    }
}

#[component]
pub fn ConnectorLogo(
    #[prop(into)] src: String,
    #[prop(into)] fallback: String,
    #[prop(optional)] size: CardSize,
) -> impl IntoView {
    let px = connector_logo_px(size);
    let style = format!("height: {px}px; width: {px}px; object-fit: contain;");

    view! {
        <FallbackImage
            src=src
            fallback=fallback
            alt=" Logo"
            class="data-sources__logo"
            style=style
        />
    }
}
