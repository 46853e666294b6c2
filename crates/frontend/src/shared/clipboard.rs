//! Clipboard utilities for copying text to clipboard
//!
//! Wraps the Web Clipboard API behind the [`Clipboard`] trait so that
//! components can be driven by a fake in tests.

use wasm_bindgen_futures::spawn_local;

/// Anything that can receive copied text.
pub trait Clipboard {
    fn write_text(&self, text: &str);
}

/// The browser's system clipboard.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) {
        copy_to_clipboard(text);
    }
}

/// Copy text to the system clipboard
///
/// Fire-and-forget: a rejected write is only logged.
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
                log::warn!("Clipboard write rejected: {:?}", e);
            }
        }
    });
}
