//! Site configuration
//!
//! Defaults describe the Ayodhya guide. The host page may override any field
//! with a JSON object in `<meta name="site-config" content="...">`.

use contracts::shared::geo::DEFAULT_FIT_PADDING;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_name: String,
    pub city_name: String,
    /// Catalogue path relative to the site root
    pub data_path: String,
    pub default_image: String,
    pub placeholder_image: String,
    pub tile_url: String,
    pub tile_attribution: String,
    pub map_center: [f64; 2],
    pub map_zoom: u8,
    pub fit_padding: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Ayodhya Guide".to_string(),
            city_name: "Ayodhya".to_string(),
            data_path: "data/places.json".to_string(),
            default_image: "images/default-temple.jpg".to_string(),
            placeholder_image: "images/placeholder.jpg".to_string(),
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_attribution: "© OpenStreetMap contributors".to_string(),
            map_center: [26.7991, 82.2044],
            map_zoom: 13,
            fit_padding: DEFAULT_FIT_PADDING,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid site config: {}", e))
    }

    /// Read the `<meta name="site-config">` override, falling back to defaults.
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector("meta[name=\"site-config\"]").ok().flatten())
            .and_then(|el| el.get_attribute("content"));

        match content {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("{}; using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
