//! Logo image with a one-shot fallback.
//!
//! When the remote logo fails to load the `<img>` switches to the bundled
//! placeholder. The swap happens once: an error on the placeholder itself
//! leaves the source alone, so a broken placeholder cannot loop.

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoSource {
    src: String,
    fallback: String,
    fell_back: bool,
}

impl LogoSource {
    /// An empty `src` starts on the fallback directly.
    pub fn new(src: impl Into<String>, fallback: impl Into<String>) -> Self {
        let src = src.into();
        let fell_back = src.is_empty();
        Self {
            src,
            fallback: fallback.into(),
            fell_back,
        }
    }

    pub fn current(&self) -> &str {
        if self.fell_back {
            &self.fallback
        } else {
            &self.src
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fell_back
    }

    /// Handle an `error` event. Returns `true` only for the swap itself.
    pub fn on_error(&mut self) -> bool {
        if self.fell_back {
            return false;
        }
        self.fell_back = true;
        true
    }
}

#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] fallback: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] style: String,
) -> impl IntoView {
    let logo = RwSignal::new(LogoSource::new(src, fallback));

    view! {
        <img
            src=move || logo.with(|l| l.current().to_string())
            alt=alt
            class=class
            style=style
            on:error=move |_| {
                logo.update(|l| {
                    if l.on_error() {
                        log::debug!("Logo failed to load, showing placeholder");
                    }
                });
            }
        />
    }
}
