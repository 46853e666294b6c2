use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::shared::components::breadcrumb::BreadcrumbHeader;
use crate::shared::config::AppConfig;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_VIEWER;

/// Only plain web URLs may be framed.
pub fn is_embeddable(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// Parsed `?variableUrl=..&chain=..` of a shared link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedVariableLink {
    pub variable_url: String,
    pub chain_id: String,
    /// The link was made on another chain than the one configured here
    pub foreign_chain: bool,
}

impl SharedVariableLink {
    /// A missing `chain` means the configured one.
    pub fn from_query(
        variable_url: Option<String>,
        chain: Option<String>,
        config: &AppConfig,
    ) -> Option<Self> {
        let variable_url = variable_url.filter(|u| is_embeddable(u))?;
        let chain_id = chain
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| config.chain.chain_id.clone());
        let foreign_chain = chain_id != config.chain.chain_id;
        Some(Self {
            variable_url,
            chain_id,
            foreign_chain,
        })
    }
}

#[component]
fn VariableFrame(url: String) -> impl IntoView {
    if is_embeddable(&url) {
        view! {
            <iframe class="variable-viewer__frame" src=url title="Safe Variable"></iframe>
        }
        .into_any()
    } else {
        log::warn!("Refusing to open variable url: {:?}", url);
        view! { <div class="alert alert--error">"Invalid variable URL"</div> }.into_any()
    }
}

/// Target of a card click: shows the variable URL in a frame.
#[component]
pub fn VariableViewerPage() -> impl IntoView {
    let query = use_query_map();
    let variable_url = move || query.with(|q| q.get("variableUrl")).unwrap_or_default();

    view! {
        <PageFrame page_id="safe_variables--viewer" category=PAGE_CAT_VIEWER>
            <BreadcrumbHeader text="Safe Variable" />
            <div class="page__content">
                {move || view! { <VariableFrame url=variable_url() /> }}
            </div>
        </PageFrame>
    }
}

/// Landing page of a copied share link.
#[component]
pub fn SharedVariablePage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let query = use_query_map();
    let link = Memo::new(move |_| {
        query.with(|q| SharedVariableLink::from_query(q.get("variableUrl"), q.get("chain"), &config))
    });

    view! {
        <PageFrame page_id="safe_variables--shared" category=PAGE_CAT_VIEWER>
            <BreadcrumbHeader text="Shared Safe Variable" />
            <div class="page__content">
                {move || match link.get() {
                    Some(link) => {
                        let notice = link.foreign_chain.then(|| {
                            log::info!("Shared variable from chain {}", link.chain_id);
                            view! {
                                <div class="alert alert--info">
                                    {format!("Shared from chain {}", link.chain_id)}
                                </div>
                            }
                        });
                        view! {
                            {notice}
                            <VariableFrame url=link.variable_url />
                        }
                        .into_any()
                    }
                    None => view! { <div class="alert alert--error">"Invalid share link"</div> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: Option<&str>, chain: Option<&str>) -> Option<SharedVariableLink> {
        SharedVariableLink::from_query(
            url.map(str::to_string),
            chain.map(str::to_string),
            &AppConfig::default(),
        )
    }

    #[test]
    fn test_is_embeddable() {
        assert!(is_embeddable("https://vars.example/gas"));
        assert!(is_embeddable("HTTP://vars.example"));
        assert!(!is_embeddable("javascript:alert(1)"));
        assert!(!is_embeddable(""));
    }

    #[test]
    fn test_shared_link_same_chain() {
        let l = link(Some("https://vars.example/gas"), Some("1")).unwrap();
        assert_eq!(l.chain_id, "1");
        assert!(!l.foreign_chain);
    }

    #[test]
    fn test_shared_link_other_chain() {
        let l = link(Some("https://vars.example/gas"), Some("100")).unwrap();
        assert_eq!(l.chain_id, "100");
        assert!(l.foreign_chain);
    }

    #[test]
    fn test_shared_link_defaults_and_rejects() {
        assert_eq!(link(Some("https://vars.example/gas"), None).unwrap().chain_id, "1");
        assert_eq!(link(None, Some("1")), None);
        assert_eq!(link(Some("javascript:alert(1)"), Some("1")), None);
    }

    #[test]
    fn test_copied_share_link_opens_on_share_page() {
        use crate::routes::paths::{share_route_path, share_user_variable_url};
        use std::collections::HashMap;

        let url = share_user_variable_url("https://safe.example", "https://vars.example/gas price", "100");
        let rest = url.trim_start_matches("https://safe.example");
        let (path, query) = rest.split_once('?').unwrap();
        assert_eq!(path, share_route_path());

        let query: HashMap<String, String> = serde_qs::from_str(query).unwrap();
        let l = SharedVariableLink::from_query(
            query.get("variableUrl").cloned(),
            query.get("chain").cloned(),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(l.variable_url, "https://vars.example/gas price");
        assert_eq!(l.chain_id, "100");
    }
}
