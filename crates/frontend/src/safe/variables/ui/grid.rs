use contracts::safe::user_variable::UserVariable;
use leptos::prelude::*;
use std::collections::HashSet;

use super::card::UserVariableCard;
use crate::safe::{CardSize, SafeSession};
use crate::shared::notifications::NotificationService;

/// Identity used for pinning: `id`, or `url` when the API sent no id.
pub fn variable_key(variable: &UserVariable) -> &str {
    if variable.id.is_empty() {
        &variable.url
    } else {
        &variable.id
    }
}

/// Pinned variables of the current session. In memory only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PinnedSet {
    keys: HashSet<String>,
}

impl PinnedSet {
    pub fn contains(&self, variable: &UserVariable) -> bool {
        self.keys.contains(variable_key(variable))
    }

    /// Returns whether the variable is pinned afterwards.
    pub fn toggle(&mut self, variable: &UserVariable) -> bool {
        let key = variable_key(variable).to_string();
        if !self.keys.remove(&key) {
            self.keys.insert(key);
            true
        } else {
            false
        }
    }

    /// Split into (pinned, rest), both in input order.
    pub fn partition(&self, variables: &[UserVariable]) -> (Vec<UserVariable>, Vec<UserVariable>) {
        variables.iter().cloned().partition(|v| self.contains(v))
    }
}

/// Owner of the pin state: renders pinned, curated and custom variables.
#[component]
pub fn VariablesGrid(
    #[prop(into)]
    variables: Signal<Vec<UserVariable>>,
    #[prop(into)]
    custom: Signal<Vec<UserVariable>>,
    session: SafeSession,
    notifications: NotificationService,
    #[prop(into)]
    fallback_logo: String,
    on_remove: Callback<UserVariable>,
    #[prop(optional)]
    size: CardSize,
) -> impl IntoView {
    let pinned = RwSignal::new(PinnedSet::default());
    let context = StoredValue::new((session, fallback_logo));

    let toggle_pin = Callback::new(move |variable: UserVariable| {
        pinned.update(|p| {
            let now = p.toggle(&variable);
            log::debug!("{} {}", if now { "Pinned" } else { "Unpinned" }, variable_key(&variable));
        });
    });

    let render = move |variable: UserVariable, is_custom: bool| {
        let (session, fallback_logo) = context.get_value();
        let key = variable_key(&variable).to_string();
        let is_pinned = Signal::derive(move || pinned.with(|p| p.keys.contains(&key)));
        if is_custom {
            view! {
                <UserVariableCard
                    variable=variable
                    size=size
                    session=session
                    toggle_pin=toggle_pin
                    is_custom=true
                    on_remove=on_remove
                    notifications=notifications
                    fallback_logo=fallback_logo
                />
            }
            .into_any()
        } else {
            view! {
                <UserVariableCard
                    variable=variable
                    size=size
                    session=session
                    toggle_pin=toggle_pin
                    is_pinned=is_pinned
                    notifications=notifications
                    fallback_logo=fallback_logo
                />
            }
            .into_any()
        }
    };

    let sections = Memo::new(move |_| {
        let all = variables.get();
        pinned.with(|p| p.partition(&all))
    });

    view! {
        <Show when=move || !sections.with(|(p, _)| p.is_empty())>
            <h2 class="variables__section-title">"Pinned"</h2>
            <div class="variables__grid">
                {move || sections.get().0.into_iter().map(|v| render(v, false)).collect_view()}
            </div>
        </Show>

        <h2 class="variables__section-title">"All variables"</h2>
        <div class="variables__grid">
            {move || sections.get().1.into_iter().map(|v| render(v, false)).collect_view()}
        </div>

        <Show when=move || custom.with(|c| !c.is_empty())>
            <h2 class="variables__section-title">"Custom"</h2>
            <div class="variables__grid">
                {move || custom.get().into_iter().map(|v| render(v, true)).collect_view()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(id: &str, url: &str) -> UserVariable {
        let mut v = UserVariable::loading(url);
        v.id = id.to_string();
        v
    }

    #[test]
    fn test_variable_key_falls_back_to_url() {
        assert_eq!(variable_key(&var("gas", "https://a")), "gas");
        assert_eq!(variable_key(&var("", "https://a")), "https://a");
    }

    #[test]
    fn test_toggle_pin() {
        let v = var("gas", "https://a");
        let mut pinned = PinnedSet::default();
        assert!(pinned.toggle(&v));
        assert!(pinned.contains(&v));
        assert!(!pinned.toggle(&v));
        assert!(!pinned.contains(&v));
    }

    #[test]
    fn test_partition_keeps_order() {
        let items = vec![var("a", "1"), var("b", "2"), var("c", "3")];
        let mut pinned = PinnedSet::default();
        pinned.toggle(&items[2]);
        pinned.toggle(&items[0]);
        let (p, rest) = pinned.partition(&items);
        assert_eq!(p.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(rest.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(), vec!["b"]);
    }
}
