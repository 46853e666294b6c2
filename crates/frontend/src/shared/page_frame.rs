//! PageFrame: standard root wrapper for every routed page.
//!
//! Usage:
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="data_sources--list" category=PAGE_CAT_LIST>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

fn page_class(category: &str, extra: &str) -> String {
    let base = match category {
        PAGE_CAT_LIST => "page",
        PAGE_CAT_VIEWER => "page page--viewer",
        PAGE_CAT_DEV => "page page--dev",
        _ => "page",
    };
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// Root wrapper that sets `id`, `data-page-category` and the BEM modifier.
#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class=page_class(category, class)
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST, ""), "page");
        assert_eq!(page_class(PAGE_CAT_DEV, "previews"), "page page--dev previews");
        assert_eq!(page_class("unknown", ""), "page");
    }
}
