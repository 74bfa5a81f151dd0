use super::model::{self, DetailState};
use crate::routes::routes::PageKind;
use crate::shared::api_utils::{location_href, page_relative, show_on_map_href};
use crate::shared::config::SiteConfig;
use crate::shared::share::{share, ShareRequest};
use crate::shared::toast::ToastService;
use leptos::prelude::*;

/// ViewModel for the place detail page
#[derive(Clone, Copy)]
pub struct PlaceDetailsViewModel {
    pub state: RwSignal<DetailState>,
}

impl PlaceDetailsViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DetailState::Loading),
        }
    }

    /// Resolve the place named by `slug`; without a slug nothing is loaded
    pub fn load(&self, slug: Option<String>, config: &SiteConfig) {
        let Some(slug) = slug else {
            self.state.set(DetailState::NoSlug);
            return;
        };

        let state = self.state;
        let site_name = config.site_name.clone();
        let data_url = page_relative(PageKind::Detail, &config.data_path);
        wasm_bindgen_futures::spawn_local(async move {
            let resolved = model::load_place(&data_url, &slug).await;
            if let DetailState::Ready(place) = &resolved {
                set_document_title(&model::page_title(&place.name, &site_name));
            }
            state.set(resolved);
        });
    }

    /// Open the main page with this place's coordinates in a new tab
    pub fn show_on_map(&self) {
        let href = self.state.with_untracked(|s| match s {
            DetailState::Ready(place) => place
                .lat_lng()
                .map(|ll| show_on_map_href(ll.lat, ll.lng, &place.slug)),
            _ => None,
        });
        let Some(href) = href else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(&href, "_blank") {
                log::warn!("Failed to open {}: {:?}", href, e);
            }
        }
    }

    pub fn share(&self, toast: ToastService) {
        let request = self.state.with_untracked(|s| match s {
            DetailState::Ready(place) => Some(ShareRequest::for_detail(place, location_href())),
            _ => None,
        });
        if let Some(request) = request {
            share(request, move |message| toast.show(message));
        }
    }
}

impl Default for PlaceDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
