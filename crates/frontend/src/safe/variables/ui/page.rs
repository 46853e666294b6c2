use contracts::safe::user_variable::{UserVariable, UserVariablesResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use super::grid::{variable_key, VariablesGrid};
use crate::safe::variables::api;
use crate::safe::SafeSession;
use crate::shared::components::breadcrumb::BreadcrumbHeader;
use crate::shared::config::AppConfig;
use crate::shared::notifications::NotificationService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const PLACEHOLDER_CARDS: usize = 3;

#[derive(Clone, Debug)]
pub struct VariablesState {
    /// Safe the lists belong to
    pub safe_address: String,
    pub variables: Vec<UserVariable>,
    pub custom: Vec<UserVariable>,
    pub is_loaded: bool,
}

impl Default for VariablesState {
    fn default() -> Self {
        Self::for_safe("")
    }
}

impl VariablesState {
    /// Skeleton cards until the first response for this safe.
    pub fn for_safe(safe_address: &str) -> Self {
        Self {
            safe_address: safe_address.to_string(),
            variables: (0..PLACEHOLDER_CARDS)
                .map(|i| UserVariable::loading(format!("placeholder-{}", i)))
                .collect(),
            custom: Vec::new(),
            is_loaded: false,
        }
    }

    pub fn needs_fetch(&self, safe_address: &str) -> bool {
        !self.is_loaded || self.safe_address != safe_address
    }

    /// A response for a safe that is no longer shown is ignored.
    pub fn apply_fetch(&mut self, safe_address: &str, result: Result<UserVariablesResponse, String>) {
        if self.safe_address != safe_address {
            log::debug!("Dropped variables of {}, now showing {}", safe_address, self.safe_address);
            return;
        }
        match result {
            Ok(resp) => {
                self.variables = resp.variables;
                self.custom = resp.custom_variables;
            }
            Err(e) => {
                log::error!("Failed to load variables: {}", e);
                self.variables.retain(|v| !v.is_loading());
            }
        }
        self.is_loaded = true;
    }

    pub fn remove_custom(&mut self, variable: &UserVariable) {
        let key = variable_key(variable);
        self.custom.retain(|v| variable_key(v) != key);
    }
}

#[component]
pub fn VariablesPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let notifications = expect_context::<NotificationService>();
    let params = use_params_map();
    let api_port = config.api.port;
    let fallback_logo = StoredValue::new(config.assets.fallback_logo.clone());

    let session = Memo::new(move |_| {
        let segment = params.with(|p| p.get("safe")).unwrap_or_default();
        SafeSession::from_route(&segment, &config)
    });

    let state = RwSignal::new(VariablesState::default());

    // Refetch whenever the route switches to another safe.
    Effect::new(move |_| {
        let safe_address = session.with(|s| s.safe_address.clone());
        if !state.with_untracked(|s| s.needs_fetch(&safe_address)) {
            return;
        }
        if state.with_untracked(|s| s.safe_address != safe_address) {
            state.set(VariablesState::for_safe(&safe_address));
        }
        spawn_local(async move {
            let result = api::fetch_user_variables(api_port, &safe_address).await;
            if state.try_update(|s| s.apply_fetch(&safe_address, result)).is_none() {
                log::debug!("Variables response arrived after unmount, dropped");
            }
        });
    });

    let on_remove = Callback::new(move |variable: UserVariable| {
        state.update(|s| s.remove_custom(&variable));
    });

    view! {
        <PageFrame page_id="safe_variables--list" category=PAGE_CAT_LIST>
            <BreadcrumbHeader text="Safe Variables" icon_name="arrow-down" />
            <div class="page__content variables">
                {move || {
                    view! {
                        <VariablesGrid
                            variables=Signal::derive(move || state.with(|s| s.variables.clone()))
                            custom=Signal::derive(move || state.with(|s| s.custom.clone()))
                            session=session.get()
                            notifications=notifications
                            fallback_logo=fallback_logo.get_value()
                            on_remove=on_remove
                        />
                    }
                }}
            </div>
        </PageFrame>
    }
}
