pub mod footer;
pub mod header;

use crate::routes::routes::PageKind;
use crate::shared::toast::Toast;
use leptos::prelude::*;

/// Page shell shared by the main and detail pages.
///
/// ```text
/// +------------------------------+
/// |            Header            |
/// +------------------------------+
/// |        page content          |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(page: PageKind, children: Children) -> impl IntoView {
    view! {
        <header::Header page=page />
        <main class="app-main">
            {children()}
        </main>
        <footer::Footer />
        <Toast />
    }
}
