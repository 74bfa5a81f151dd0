use crate::routes::routes::AppRoutes;
use crate::shared::config::SiteConfig;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Site configuration for the whole page, with the host page's overrides
    provide_context(SiteConfig::from_document());

    // Transient "copied" confirmations
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
