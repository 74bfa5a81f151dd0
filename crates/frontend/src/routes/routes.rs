use crate::domain::a001_place::ui::details::PlaceDetails;
use crate::domain::a001_place::ui::list::PlaceList;
use crate::layout::Shell;
use crate::shared::api_utils::location_pathname;
use leptos::prelude::*;
// Static pages: the page is picked from the path, no client-side router

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// `index.html`: search, cards and map
    Main,
    /// `pages/place.html?slug=...`
    Detail,
}

impl PageKind {
    pub fn from_pathname(pathname: &str) -> Self {
        let path = pathname.trim_end_matches('/');
        if path.ends_with("place.html") || path.contains("/pages/place") {
            PageKind::Detail
        } else {
            PageKind::Main
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let page = PageKind::from_pathname(&location_pathname());
    log::info!("Opening {:?} page", page);

    view! {
        <Shell page=page>
            {match page {
                PageKind::Main => view! { <PlaceList /> }.into_any(),
                PageKind::Detail => view! { <PlaceDetails /> }.into_any(),
            }}
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_kind_from_pathname() {
        assert_eq!(PageKind::from_pathname("/"), PageKind::Main);
        assert_eq!(PageKind::from_pathname("/index.html"), PageKind::Main);
        assert_eq!(PageKind::from_pathname("/pages/place.html"), PageKind::Detail);
        assert_eq!(PageKind::from_pathname("/place.html"), PageKind::Detail);
        assert_eq!(PageKind::from_pathname("/guide/pages/place/"), PageKind::Detail);
        assert_eq!(PageKind::from_pathname(""), PageKind::Main);
    }
}
