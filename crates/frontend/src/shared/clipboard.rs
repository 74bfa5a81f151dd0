//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API when the browser exposes it.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

/// Whether `navigator.clipboard` exists in this browser
pub fn has_clipboard() -> bool {
    web_sys::window()
        .map(|w| {
            js_sys::Reflect::get(&w.navigator(), &JsValue::from_str("clipboard"))
                .map(|v| !v.is_undefined() && !v.is_null())
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Copy text to clipboard with a callback on success
///
/// Useful when you need to show a notification after copying.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
                Ok(_) => on_success(),
                Err(e) => log::warn!("Clipboard write failed: {:?}", e),
            }
        }
    });
}
