//! Actions of a ready variable card, kept free of DOM so they can be tested.

use contracts::safe::user_variable::UserVariable;

use crate::routes::paths::share_user_variable_url;
use crate::shared::clipboard::Clipboard;
use crate::shared::notifications::{Notifier, SHARE_SAFE_VARIABLE_URL_COPIED};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Share,
    TogglePin,
    Remove,
}

/// Share is always there; custom variables can be removed, curated ones pinned.
pub fn visible_actions(is_custom: bool) -> Vec<CardAction> {
    if is_custom {
        vec![CardAction::Share, CardAction::Remove]
    } else {
        vec![CardAction::Share, CardAction::TogglePin]
    }
}

impl CardAction {
    pub fn aria_label(&self, name: &str, is_pinned: bool) -> String {
        match self {
            CardAction::Share => format!("copy {} Safe UserVariable share link to clipboard", name),
            CardAction::TogglePin if is_pinned => format!("Unpin {} Safe UserVariable", name),
            CardAction::TogglePin => format!("Pin {} Safe UserVariable", name),
            CardAction::Remove => format!("Remove {} custom Safe UserVariable", name),
        }
    }

    pub fn tooltip(&self, is_pinned: bool) -> &'static str {
        match self {
            CardAction::Share => "Copy share link",
            CardAction::TogglePin if is_pinned => "Unpin from the Safe Variables",
            CardAction::TogglePin => "Pin to the Safe Variables",
            CardAction::Remove => "Remove Custom Safe UserVariable",
        }
    }

    pub fn icon_name(&self, is_pinned: bool) -> &'static str {
        match self {
            CardAction::Share => "share",
            CardAction::TogglePin if is_pinned => "bookmark-filled",
            CardAction::TogglePin => "bookmark",
            CardAction::Remove => "delete",
        }
    }

    pub fn class(&self, is_pinned: bool) -> &'static str {
        match self {
            CardAction::TogglePin if is_pinned => "icon-btn icon-btn--pinned",
            CardAction::Remove => "icon-btn icon-btn--danger",
            _ => "icon-btn",
        }
    }
}

/// The two cancellations an action click needs. Implemented for the DOM
/// mouse event and for recording fakes in tests.
pub trait ContainedEvent {
    fn cancel_default(&self);
    fn stop_bubbling(&self);
}

impl ContainedEvent for leptos::ev::MouseEvent {
    fn cancel_default(&self) {
        self.prevent_default();
    }

    fn stop_bubbling(&self) {
        self.stop_propagation();
    }
}

/// Action buttons sit inside the card link: their click must neither
/// navigate nor bubble up to it.
pub fn contain_click(ev: &impl ContainedEvent) {
    ev.cancel_default();
    ev.stop_bubbling();
}

/// What an action click asks the outside world to do.
#[derive(Clone, Debug, PartialEq)]
pub enum CardCommand {
    Share(String),
    TogglePin(UserVariable),
    Remove(UserVariable),
    Nothing,
}

/// Map a click to a command. Actions hidden for this kind of card resolve
/// to `Nothing`.
pub fn resolve(
    action: CardAction,
    variable: &UserVariable,
    chain_id: &str,
    origin: &str,
    is_custom: bool,
) -> CardCommand {
    match action {
        CardAction::Share => {
            CardCommand::Share(share_user_variable_url(origin, &variable.url, chain_id))
        }
        CardAction::TogglePin if !is_custom => CardCommand::TogglePin(variable.clone()),
        CardAction::Remove if is_custom => CardCommand::Remove(variable.clone()),
        _ => CardCommand::Nothing,
    }
}

/// Copy the share link and raise exactly one "copied" notification.
pub fn run_share(url: &str, clipboard: &dyn Clipboard, notifier: &dyn Notifier) {
    clipboard.write_text(url);
    notifier.show_notification(&SHARE_SAFE_VARIABLE_URL_COPIED);
}

/// Carry out a command. A custom card without a remove handler does nothing.
pub fn execute(
    command: CardCommand,
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
    toggle_pin: &dyn Fn(UserVariable),
    on_remove: Option<&dyn Fn(UserVariable)>,
) {
    match command {
        CardCommand::Share(url) => run_share(&url, clipboard, notifier),
        CardCommand::TogglePin(variable) => toggle_pin(variable),
        CardCommand::Remove(variable) => {
            if let Some(remove) = on_remove {
                remove(variable);
            }
        }
        CardCommand::Nothing => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::NotificationSpec;
    use contracts::safe::user_variable::FetchStatus;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeClipboard {
        written: RefCell<Vec<String>>,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&self, text: &str) {
            self.written.borrow_mut().push(text.to_string());
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        shown: RefCell<Vec<NotificationSpec>>,
    }

    impl Notifier for FakeNotifier {
        fn show_notification(&self, spec: &NotificationSpec) {
            self.shown.borrow_mut().push(*spec);
        }
    }

    #[derive(Default)]
    struct RecordingEvent {
        defaults_cancelled: Cell<u32>,
        bubbling_stopped: Cell<u32>,
    }

    impl ContainedEvent for RecordingEvent {
        fn cancel_default(&self) {
            self.defaults_cancelled.set(self.defaults_cancelled.get() + 1);
        }

        fn stop_bubbling(&self) {
            self.bubbling_stopped.set(self.bubbling_stopped.get() + 1);
        }
    }

    fn variable() -> UserVariable {
        UserVariable {
            id: "gas".to_string(),
            name: "Gas price".to_string(),
            description: "Current gas price".to_string(),
            url: "https://vars.example/gas".to_string(),
            image_url: "https://vars.example/gas.svg".to_string(),
            fetch_status: FetchStatus::Success,
        }
    }

    #[test]
    fn test_visible_actions() {
        let custom = visible_actions(true);
        assert!(custom.contains(&CardAction::Remove));
        assert!(!custom.contains(&CardAction::TogglePin));

        let curated = visible_actions(false);
        assert!(curated.contains(&CardAction::TogglePin));
        assert!(!curated.contains(&CardAction::Remove));

        assert_eq!(custom[0], CardAction::Share);
        assert_eq!(curated[0], CardAction::Share);
    }

    #[test]
    fn test_pin_labels_follow_state() {
        assert_eq!(
            CardAction::TogglePin.aria_label("Gas price", true),
            "Unpin Gas price Safe UserVariable"
        );
        assert_eq!(
            CardAction::TogglePin.aria_label("Gas price", false),
            "Pin Gas price Safe UserVariable"
        );
        assert_eq!(CardAction::TogglePin.icon_name(true), "bookmark-filled");
        assert_eq!(CardAction::TogglePin.icon_name(false), "bookmark");
    }

    #[test]
    fn test_toggle_pin_passes_exact_entity() {
        let v = variable();
        let received = RefCell::new(Vec::new());
        let command = resolve(CardAction::TogglePin, &v, "1", "https://safe.example", false);
        execute(
            command,
            &FakeClipboard::default(),
            &FakeNotifier::default(),
            &|got| received.borrow_mut().push(got),
            None,
        );
        assert_eq!(received.into_inner(), vec![v]);
    }

    #[test]
    fn test_hidden_actions_resolve_to_nothing() {
        let v = variable();
        assert_eq!(resolve(CardAction::TogglePin, &v, "1", "", true), CardCommand::Nothing);
        assert_eq!(resolve(CardAction::Remove, &v, "1", "", false), CardCommand::Nothing);
    }

    #[test]
    fn test_remove_without_handler_is_noop() {
        let v = variable();
        let pinned = RefCell::new(0);
        let notifier = FakeNotifier::default();
        let command = resolve(CardAction::Remove, &v, "1", "", true);
        assert_eq!(command, CardCommand::Remove(v.clone()));
        execute(
            command,
            &FakeClipboard::default(),
            &notifier,
            &|_| *pinned.borrow_mut() += 1,
            None,
        );
        assert_eq!(*pinned.borrow(), 0);
        assert!(notifier.shown.borrow().is_empty());
    }

    #[test]
    fn test_remove_with_handler() {
        let v = variable();
        let removed = RefCell::new(Vec::new());
        let remove: &dyn Fn(UserVariable) = &|got| removed.borrow_mut().push(got);
        execute(
            resolve(CardAction::Remove, &v, "1", "", true),
            &FakeClipboard::default(),
            &FakeNotifier::default(),
            &|_| {},
            Some(remove),
        );
        assert_eq!(removed.into_inner(), vec![v]);
    }

    #[test]
    fn test_share_copies_url_and_notifies_once() {
        let v = variable();
        let clipboard = FakeClipboard::default();
        let notifier = FakeNotifier::default();
        let command = resolve(CardAction::Share, &v, "100", "https://safe.example", false);
        execute(command, &clipboard, &notifier, &|_| {}, None);

        let written = clipboard.written.into_inner();
        assert_eq!(written.len(), 1);
        assert!(written[0].contains(&v.url));
        assert!(written[0].contains("100"));

        let shown = notifier.shown.into_inner();
        assert_eq!(shown, vec![SHARE_SAFE_VARIABLE_URL_COPIED]);
    }

    #[test]
    fn test_contain_click_cancels_navigation_and_bubbling() {
        let ev = RecordingEvent::default();
        contain_click(&ev);
        assert_eq!(ev.defaults_cancelled.get(), 1);
        assert_eq!(ev.bubbling_stopped.get(), 1);
    }
}
