use crate::routes::routes::PageKind;
use crate::shared::api_utils::HOME_FROM_DETAIL;
use crate::shared::config::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn Header(page: PageKind) -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig not found in context");

    // Anchors on the main page, links back to it from the detail page
    let home = match page {
        PageKind::Main => "#",
        PageKind::Detail => HOME_FROM_DETAIL,
    };
    let map_link = match page {
        PageKind::Main => "#map-section".to_string(),
        PageKind::Detail => format!("{}#map-section", HOME_FROM_DETAIL),
    };

    view! {
        <header class="header">
            <nav class="navbar container">
                <a href=home class="nav-logo">
                    <span class="nav-logo__icon">"🛕"</span>
                    <span class="nav-logo__title">{config.site_name.clone()}</span>
                </a>
                <ul class="nav-menu">
                    <li><a href=home class="nav-link">"Home"</a></li>
                    <li><a href=map_link class="nav-link">"Map"</a></li>
                </ul>
            </nav>
        </header>
    }
}
