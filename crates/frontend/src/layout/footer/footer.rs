use crate::shared::config::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig not found in context");

    view! {
        <footer class="footer">
            <div class="container footer__content">
                <p>{format!("{} - discover the temples, ghats and heritage of {}.", config.site_name, config.city_name)}</p>
                <p class="footer__attribution">{format!("Map data {}", config.tile_attribution)}</p>
            </div>
        </footer>
    }
}
