//! Проекция видимых мест на маркеры карты

use crate::shared::api_utils::detail_href;
use ammonia::clean_text;
use contracts::domain::a001_place::aggregate::{LatLng, Place};
use contracts::shared::geo::Bounds;

pub const DEFAULT_MARKER_COLOR: &str = "#666";
pub const POPUP_DESCRIPTION_CHARS: usize = 100;

pub fn category_color(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "temple" => "#ff9800",
        "historical" => "#4caf50",
        "cultural" => "#9c27b0",
        _ => DEFAULT_MARKER_COLOR,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSpec {
    pub slug: String,
    pub position: LatLng,
    pub color: &'static str,
    pub popup_html: String,
}

impl MarkerSpec {
    /// `None` when the place has no usable coordinate pair
    pub fn from_place(place: &Place, default_image: &str) -> Option<Self> {
        let position = place.lat_lng()?;
        Some(Self {
            slug: place.slug.clone(),
            position,
            color: category_color(&place.category),
            popup_html: popup_html(place, default_image),
        })
    }

    /// Inner HTML of the Leaflet `divIcon`
    pub fn icon_html(&self) -> String {
        format!(
            "<div style=\"background-color: {}; width: 20px; height: 20px; border-radius: 50%; border: 3px solid white; box-shadow: 0 2px 8px rgba(0,0,0,0.3);\"></div>",
            self.color
        )
    }
}

pub fn truncate_description(description: &str) -> String {
    let head: String = description.chars().take(POPUP_DESCRIPTION_CHARS).collect();
    format!("{}...", head)
}

fn popup_html(place: &Place, default_image: &str) -> String {
    let image = place
        .image
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(default_image);
    let name = clean_text(&place.name);

    format!(
        r#"<div class="map-popup">
    <div class="popup-image"><img src="{image}" alt="{name}" onerror="this.style.display='none';"></div>
    <h3 class="popup-title">{name}</h3>
    <p class="popup-description">{description}</p>
    <div class="popup-meta">
        <span class="popup-category">{category}</span>
        <span class="popup-rating">★ {rating}</span>
    </div>
    <a class="popup-link" href="{href}">Learn More</a>
</div>"#,
        image = clean_text(image),
        name = name,
        description = clean_text(&truncate_description(&place.description)),
        category = clean_text(&place.category_label()),
        rating = place.rating,
        href = clean_text(&detail_href(&place.slug)),
    )
}

/// Markers for `places` plus the padded viewport that bounds them.
///
/// Places without coordinates are skipped; bounds are `None` when no marker remains.
pub fn project_markers(places: &[Place], default_image: &str, padding: f64) -> (Vec<MarkerSpec>, Option<Bounds>) {
    let markers: Vec<MarkerSpec> = places
        .iter()
        .filter_map(|p| {
            let marker = MarkerSpec::from_place(p, default_image);
            if marker.is_none() {
                log::debug!("Skipping marker for '{}': no coordinates", p.slug);
            }
            marker
        })
        .collect();
    let bounds = Bounds::around(markers.iter().map(|m| m.position)).map(|b| b.pad(padding));
    (markers, bounds)
}
