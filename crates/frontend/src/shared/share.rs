//! Sharing a place
//!
//! Capabilities are tried in priority order: native share sheet, clipboard,
//! blocking alert.

use super::clipboard::{copy_to_clipboard_with_callback, has_clipboard};
use contracts::domain::a001_place::aggregate::Place;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareChannel {
    Native,
    Clipboard,
    Alert,
}

impl ShareChannel {
    pub fn pick(has_native_share: bool, has_clipboard: bool) -> Self {
        if has_native_share {
            ShareChannel::Native
        } else if has_clipboard {
            ShareChannel::Clipboard
        } else {
            ShareChannel::Alert
        }
    }
}

/// Payload for `navigator.share`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareRequest {
    pub data: ShareData,
    /// Text copied (or alerted) when native sharing is unavailable
    pub fallback_text: String,
    pub copied_message: &'static str,
}

impl ShareRequest {
    /// Share action of a result card on the main page
    pub fn for_card(place: &Place, city: &str, detail_url: String) -> Self {
        Self {
            data: ShareData {
                title: place.name.clone(),
                text: format!("Check out {} in {}: {}", place.name, city, place.description),
                url: detail_url,
            },
            fallback_text: format!("{} - {}", place.name, place.description),
            copied_message: "Place information copied to clipboard!",
        }
    }

    /// Share action of the detail page; `href` is the page's own URL
    pub fn for_detail(place: &Place, href: String) -> Self {
        Self {
            fallback_text: format!("{} - {}\n\n{}", place.name, place.description, href),
            data: ShareData {
                title: place.name.clone(),
                text: place.description.clone(),
                url: href,
            },
            copied_message: "Link copied to clipboard!",
        }
    }
}

fn native_share_fn() -> Option<(web_sys::Navigator, js_sys::Function)> {
    let navigator = web_sys::window()?.navigator();
    let share = js_sys::Reflect::get(&navigator, &JsValue::from_str("share")).ok()?;
    let share = share.dyn_into::<js_sys::Function>().ok()?;
    Some((navigator, share))
}

/// Share `request` through the best available channel.
///
/// `on_copied` runs with the confirmation message after a successful clipboard copy.
pub fn share<F>(request: ShareRequest, on_copied: F)
where
    F: FnOnce(&'static str) + 'static,
{
    let native = native_share_fn();
    match ShareChannel::pick(native.is_some(), has_clipboard()) {
        ShareChannel::Native => {
            let Some((navigator, share_fn)) = native else {
                return;
            };
            let payload = match serde_wasm_bindgen::to_value(&request.data) {
                Ok(v) => v,
                Err(e) => {
                    log::warn!("Failed to build share payload: {}", e);
                    return;
                }
            };
            match share_fn.call1(&navigator, &payload) {
                Ok(promise) => {
                    let promise = js_sys::Promise::from(promise);
                    wasm_bindgen_futures::spawn_local(async move {
                        // Rejected when the user dismisses the share sheet
                        if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                            log::info!("Share dismissed: {:?}", e);
                        }
                    });
                }
                Err(e) => log::warn!("navigator.share failed: {:?}", e),
            }
        }
        ShareChannel::Clipboard => {
            let message = request.copied_message;
            copy_to_clipboard_with_callback(&request.fallback_text, move || on_copied(message));
        }
        ShareChannel::Alert => {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&request.fallback_text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_place::seed::seed_place;

    #[test]
    fn test_channel_priority() {
        assert_eq!(ShareChannel::pick(true, true), ShareChannel::Native);
        assert_eq!(ShareChannel::pick(true, false), ShareChannel::Native);
        assert_eq!(ShareChannel::pick(false, true), ShareChannel::Clipboard);
        assert_eq!(ShareChannel::pick(false, false), ShareChannel::Alert);
    }

    #[test]
    fn test_card_request_text() {
        let place = seed_place("kanak-bhawan").unwrap();
        let req = ShareRequest::for_card(
            &place,
            "Ayodhya",
            "https://guide.example/pages/place.html?slug=kanak-bhawan".into(),
        );
        assert_eq!(req.data.title, "Kanak Bhawan");
        assert!(req.data.text.starts_with("Check out Kanak Bhawan in Ayodhya: Beautiful temple"));
        assert_eq!(req.fallback_text, format!("Kanak Bhawan - {}", place.description));
        assert_eq!(req.copied_message, "Place information copied to clipboard!");
    }

    #[test]
    fn test_detail_request_includes_href() {
        let place = seed_place("hanuman-garhi").unwrap();
        let href = "https://guide.example/pages/place.html?slug=hanuman-garhi".to_string();
        let req = ShareRequest::for_detail(&place, href.clone());
        assert_eq!(req.data.url, href);
        assert_eq!(req.data.text, place.description);
        assert!(req.fallback_text.ends_with(&format!("\n\n{}", href)));
        assert_eq!(req.copied_message, "Link copied to clipboard!");
    }
}
