use crate::shared::api_utils::slug_param;
use crate::shared::catalogue::load_catalogue;
use contracts::domain::a001_place::aggregate::{LatLng, Place};
use contracts::domain::a001_place::catalogue::find_by_slug;
use contracts::domain::a001_place::seed::seed_place;

#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    NoSlug,
    NotFound,
    Ready(Place),
}

impl DetailState {
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            DetailState::NoSlug => Some("No place specified"),
            DetailState::NotFound => Some("Place not found"),
            DetailState::Loading | DetailState::Ready(_) => None,
        }
    }
}

/// `slug` query parameter, ignoring empty values
pub fn slug_from_search(search: &str) -> Option<String> {
    slug_param(search).filter(|s| !s.trim().is_empty())
}

/// Look `slug` up in the loaded catalogue, then in the embedded fallback table.
pub fn resolve_place(catalogue: &[Place], slug: &str) -> DetailState {
    find_by_slug(catalogue, slug)
        .cloned()
        .or_else(|| seed_place(slug))
        .map(DetailState::Ready)
        .unwrap_or(DetailState::NotFound)
}

pub async fn load_place(data_url: &str, slug: &str) -> DetailState {
    let catalogue = load_catalogue(data_url).await;
    let state = resolve_place(&catalogue, slug);
    if state == DetailState::NotFound {
        log::warn!("Place '{}' not found", slug);
    }
    state
}

/// "Hanuman Garhi - Ayodhya Guide"
pub fn page_title(place_name: &str, site_name: &str) -> String {
    format!("{} - {}", place_name, site_name)
}

/// Owned header labels of the detail page
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceHeading {
    pub title: String,
    pub category: String,
    pub category_label: String,
    pub rating: String,
}

impl PlaceHeading {
    pub fn from_place(place: &Place) -> Self {
        Self {
            title: place.name.clone(),
            category: place.category.clone(),
            category_label: place.category_label(),
            rating: format!("★ {}", place.rating),
        }
    }
}

pub fn coordinates_text(position: LatLng) -> String {
    format!("Coordinates: {}°N, {}°E", position.lat, position.lng)
}
