//! URL utilities
//!
//! The site is served as static files: `index.html` at the root and the detail
//! page one directory down at `pages/place.html`. Asset and data paths in the
//! catalogue are relative to the site root.

use crate::routes::routes::PageKind;
use serde::{Deserialize, Serialize};

pub const DETAIL_PAGE_PATH: &str = "pages/place.html";
pub const HOME_FROM_DETAIL: &str = "../index.html";

/// Resolve a site-root-relative path for the page it is used on.
///
/// Absolute, remote, data and already `../`-relative paths are left untouched.
pub fn page_relative(page: PageKind, path: &str) -> String {
    let untouched = ["http://", "https://", "data:", "/", "../"];
    match page {
        PageKind::Main => path.to_string(),
        PageKind::Detail if untouched.iter().any(|p| path.starts_with(p)) => path.to_string(),
        PageKind::Detail => format!("../{}", path),
    }
}

/// Link from the main page to the detail page of `slug`
pub fn detail_href(slug: &str) -> String {
    format!("{}?slug={}", DETAIL_PAGE_PATH, urlencoding::encode(slug))
}

/// Absolute detail link used when sharing from the main page
pub fn absolute_detail_href(origin: &str, slug: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), detail_href(slug))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDeepLink {
    pub center: String,
    pub place: String,
}

/// `../index.html?center=<lat>,<lng>&place=<slug>`
pub fn show_on_map_href(lat: f64, lng: f64, slug: &str) -> String {
    let link = MapDeepLink {
        center: format!("{},{}", lat, lng),
        place: slug.to_string(),
    };
    let query = serde_qs::to_string(&link).unwrap_or_default();
    format!("{}?{}", HOME_FROM_DETAIL, query)
}

/// Query string of the detail page; unrelated parameters are ignored
#[derive(Debug, Default, Deserialize)]
struct PlaceQuery {
    slug: Option<String>,
}

/// `slug` parameter of `search` (may start with `?`)
pub fn slug_param(search: &str) -> Option<String> {
    let config = serde_qs::Config::new(5, false);
    match config.deserialize_str::<PlaceQuery>(search.trim_start_matches('?')) {
        Ok(query) => query.slug,
        Err(e) => {
            log::warn!("Unreadable query string '{}': {}", search, e);
            None
        }
    }
}

pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn location_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn location_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

pub fn location_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_relative_main_untouched() {
        assert_eq!(page_relative(PageKind::Main, "images/a.jpg"), "images/a.jpg");
        assert_eq!(page_relative(PageKind::Main, "data/places.json"), "data/places.json");
    }

    #[test]
    fn test_page_relative_detail_goes_up_one_level() {
        assert_eq!(page_relative(PageKind::Detail, "images/a.jpg"), "../images/a.jpg");
        assert_eq!(page_relative(PageKind::Detail, "data/places.json"), "../data/places.json");
        assert_eq!(page_relative(PageKind::Detail, "../images/a.jpg"), "../images/a.jpg");
        assert_eq!(page_relative(PageKind::Detail, "/images/a.jpg"), "/images/a.jpg");
        assert_eq!(
            page_relative(PageKind::Detail, "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn test_detail_href_encodes_slug() {
        assert_eq!(detail_href("hanuman-garhi"), "pages/place.html?slug=hanuman-garhi");
        assert_eq!(detail_href("a b&c"), "pages/place.html?slug=a%20b%26c");
        assert_eq!(
            absolute_detail_href("https://guide.example/", "kanak-bhawan"),
            "https://guide.example/pages/place.html?slug=kanak-bhawan"
        );
    }

    #[test]
    fn test_show_on_map_href_round_trips() {
        let href = show_on_map_href(26.7991, 82.2044, "hanuman-garhi");
        let (path, query) = href.split_once('?').unwrap();
        assert_eq!(path, "../index.html");
        let link: MapDeepLink = serde_qs::from_str(query).unwrap();
        assert_eq!(link.center, "26.7991,82.2044");
        assert_eq!(link.place, "hanuman-garhi");
    }

    #[test]
    fn test_slug_param() {
        assert_eq!(slug_param("?slug=kanak-bhawan").as_deref(), Some("kanak-bhawan"));
        assert_eq!(slug_param("slug=x&other=1").as_deref(), Some("x"));
        assert_eq!(slug_param(""), None);
        assert_eq!(slug_param("?foo=bar"), None);
    }

    #[test]
    fn test_slug_survives_nested_parameters() {
        assert_eq!(
            slug_param("?slug=hanuman-garhi&utm[src]=x").as_deref(),
            Some("hanuman-garhi")
        );
        assert_eq!(
            slug_param("?utm%5Bsrc%5D=x&slug=kanak-bhawan").as_deref(),
            Some("kanak-bhawan")
        );
    }
}
