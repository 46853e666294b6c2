use leptos::prelude::*;
use thaw::Card;

use super::layout::CardLayout;
use super::view_model::SkeletonModel;

/// Description placeholder lines under the title placeholder
pub const SKELETON_TEXT_LINES: usize = 2;

/// Placeholder with the same geometry as the loaded card.
#[component]
pub fn UserVariableSkeleton(layout: CardLayout, model: SkeletonModel) -> impl IntoView {
    let logo_style = format!("width: {px}px; height: {px}px;", px = model.logo_px);

    view! {
        <div
            class="user-variable-card user-variable-card--loading"
            style=layout.container_style()
            aria-busy="true"
        >
            <Card attr:style=layout.card_style()>
                <div class="user-variable-card__logo" style=layout.logo_container_style()>
                    <div class="skeleton skeleton--logo" style=logo_style></div>
                </div>
                <div class="user-variable-card__description" style=layout.description_style()>
                    <div class="skeleton skeleton--title"></div>
                    {(0..model.text_lines)
                        .map(|_| view! { <div class="skeleton skeleton--text"></div> })
                        .collect_view()}
                </div>
            </Card>
        </div>
    }
}
