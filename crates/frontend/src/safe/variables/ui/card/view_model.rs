//! What a card shows, computed without touching the DOM.

use contracts::safe::user_variable::UserVariable;

use super::actions::{visible_actions, CardAction};
use super::layout::CardLayout;
use super::skeleton::SKELETON_TEXT_LINES;
use super::CardState;
use crate::routes::paths::open_variable_link;
use crate::safe::SafeSession;

#[derive(Clone, Debug, PartialEq)]
pub enum CardView {
    Skeleton(SkeletonModel),
    Ready(ReadyCardModel),
}

impl CardView {
    pub fn of(variable: &UserVariable, session: &SafeSession, layout: &CardLayout) -> Self {
        match CardState::of(variable) {
            CardState::Loading => CardView::Skeleton(SkeletonModel {
                logo_px: layout.logo_px,
                text_lines: SKELETON_TEXT_LINES,
            }),
            CardState::Ready => CardView::Ready(ReadyCardModel::new(variable, session)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkeletonModel {
    pub logo_px: u32,
    pub text_lines: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadyCardModel {
    pub title: String,
    pub description: String,
    pub open_link: String,
    pub link_label: String,
    pub image_url: String,
    pub logo_alt: String,
}

impl ReadyCardModel {
    pub fn new(variable: &UserVariable, session: &SafeSession) -> Self {
        let name = &variable.name;
        let logo_alt = if name.is_empty() {
            "Safe UserVariable Logo".to_string()
        } else {
            format!("{} Logo", name)
        };
        Self {
            title: name.clone(),
            description: variable.description.clone(),
            open_link: open_variable_link(session, &variable.url),
            link_label: format!("open {} Safe UserVariable", name),
            image_url: variable.image_url.clone(),
            logo_alt,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionButton {
    pub action: CardAction,
    pub aria_label: String,
    pub tooltip: &'static str,
    pub icon: &'static str,
    pub class: &'static str,
}

pub fn action_buttons(is_custom: bool, name: &str, is_pinned: bool) -> Vec<ActionButton> {
    visible_actions(is_custom)
        .into_iter()
        .map(|action| ActionButton {
            action,
            aria_label: action.aria_label(name, is_pinned),
            tooltip: action.tooltip(is_pinned),
            icon: action.icon_name(is_pinned),
            class: action.class(is_pinned),
        })
        .collect()
}
