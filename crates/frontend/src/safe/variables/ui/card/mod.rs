//! Card of a single safe variable.
//!
//! Two exclusive states: a skeleton while the variable is loading and the
//! clickable card once it is ready. The card never mutates the variable;
//! pin and remove are forwarded to the owner through callbacks.

pub mod actions;
pub mod layout;
mod skeleton;
pub mod view_model;

use contracts::safe::user_variable::{FetchStatus, UserVariable};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use thaw::Card;

use crate::routes::paths::current_origin;
use crate::safe::{CardSize, SafeSession};
use crate::shared::clipboard::BrowserClipboard;
use crate::shared::icons::icon;
use crate::shared::image_fallback::FallbackImage;
use crate::shared::notifications::NotificationService;
use actions::{contain_click, execute, resolve, CardAction};
use layout::{CardLayout, CARD_HEIGHT_PX};
use skeleton::UserVariableSkeleton;
use view_model::{action_buttons, CardView, ReadyCardModel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState {
    Loading,
    Ready,
}

impl CardState {
    pub fn of(variable: &UserVariable) -> Self {
        match variable.fetch_status {
            FetchStatus::Loading => CardState::Loading,
            FetchStatus::Success | FetchStatus::Error => CardState::Ready,
        }
    }
}

#[component]
pub fn UserVariableCard(
    variable: UserVariable,
    #[prop(optional)]
    size: CardSize,
    /// Chain and safe the card is rendered for
    session: SafeSession,
    toggle_pin: Callback<UserVariable>,
    #[prop(optional, into)]
    is_pinned: MaybeProp<bool>,
    /// User-added variable: removable instead of pinnable
    #[prop(optional)]
    is_custom: bool,
    #[prop(optional)]
    on_remove: Option<Callback<UserVariable>>,
    notifications: NotificationService,
    #[prop(into)]
    fallback_logo: String,
) -> impl IntoView {
    let layout = CardLayout::for_size(size);

    match CardView::of(&variable, &session, &layout) {
        CardView::Skeleton(model) => {
            view! { <UserVariableSkeleton layout=layout model=model /> }.into_any()
        }
        CardView::Ready(model) => view! {
            <ReadyCard
                model=model
                variable=variable
                layout=layout
                chain_id=session.chain_id
                toggle_pin=toggle_pin
                is_pinned=is_pinned
                is_custom=is_custom
                on_remove=on_remove
                notifications=notifications
                fallback_logo=fallback_logo
            />
        }
        .into_any(),
    }
}

#[component]
fn ReadyCard(
    model: ReadyCardModel,
    variable: UserVariable,
    layout: CardLayout,
    chain_id: String,
    toggle_pin: Callback<UserVariable>,
    is_pinned: MaybeProp<bool>,
    is_custom: bool,
    on_remove: Option<Callback<UserVariable>>,
    notifications: NotificationService,
    fallback_logo: String,
) -> impl IntoView {
    let link_style = format!(
        "display: flex; flex: 1 0; height: {}px; text-decoration: none;",
        CARD_HEIGHT_PX
    );

    let data = StoredValue::new((variable, chain_id));
    let title = StoredValue::new(model.title.clone());
    let pinned = move || is_pinned.get().unwrap_or(false);

    let on_action = move |action: CardAction, ev: MouseEvent| {
        contain_click(&ev);
        log::debug!("Variable card action: {:?}", action);

        let command =
            data.with_value(|(v, chain_id)| resolve(action, v, chain_id, &current_origin(), is_custom));
        let remove = on_remove.map(|cb| move |v: UserVariable| cb.run(v));
        execute(
            command,
            &BrowserClipboard,
            &notifications,
            &|v| toggle_pin.run(v),
            remove.as_ref().map(|f| f as &dyn Fn(UserVariable)),
        );
    };

    let buttons = move || {
        title
            .with_value(|name| action_buttons(is_custom, name, pinned()))
            .into_iter()
            .map(|button| {
                let action = button.action;
                view! {
                    <button
                        type="button"
                        class=button.class
                        aria-label=button.aria_label
                        title=button.tooltip
                        on:click=move |ev| on_action(action, ev)
                    >
                        {icon(button.icon)}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="user-variable-card" style=layout.container_style()>
            <a
                href=model.open_link
                class="user-variable-card__link"
                aria-label=model.link_label
                style=link_style
            >
                <Card attr:style=layout.card_style()>
                    <div class="user-variable-card__logo" style=layout.logo_container_style()>
                        <FallbackImage
                            src=model.image_url
                            fallback=fallback_logo
                            alt=model.logo_alt
                            style=layout.logo_style()
                        />
                    </div>

                    <div class="user-variable-card__description" style=layout.description_style()>
                        <h5 class="user-variable-card__title">{model.title}</h5>
                        <p class="user-variable-card__text">{model.description}</p>
                    </div>

                    <div
                        class="user-variable-card__actions"
                        on:click=|ev: MouseEvent| contain_click(&ev)
                    >
                        {buttons}
                    </div>
                </Card>
            </a>
        </div>
    }
}
