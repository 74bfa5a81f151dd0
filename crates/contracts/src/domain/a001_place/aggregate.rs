use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Числовой идентификатор достопримечательности из каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub u32);

/// Latitude/longitude pair as consumed by the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Достопримечательность (запись каталога `data/places.json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub id: PlaceId,
    pub slug: String,
    pub name: String,

    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub location: String,

    /// `[lat, lng]` as written in the data file; anything else is ignored by the map
    #[serde(default)]
    pub coordinates: Option<Vec<f64>>,

    #[serde(default)]
    pub timings: String,
    #[serde(rename = "entryFee", default)]
    pub entry_fee: String,
    #[serde(rename = "bestTime", default)]
    pub best_time: String,

    // Расширенные поля (только для страницы детализации)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
}

impl Place {
    /// Coordinates usable by the map, `None` unless exactly two values are present.
    pub fn lat_lng(&self) -> Option<LatLng> {
        match self.coordinates.as_deref() {
            Some([lat, lng]) => Some(LatLng::new(*lat, *lng)),
            _ => None,
        }
    }

    /// Case-insensitive substring match over name, description, category and location.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        [
            &self.name,
            &self.description,
            &self.category,
            &self.location,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }

    pub fn is_in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Category with the first letter uppercased ("temple" -> "Temple").
    pub fn category_label(&self) -> String {
        capitalize_first(&self.category)
    }

    /// Rating clamped to the `[0, 5]` range used by every projection.
    pub fn clamped_rating(&self) -> f64 {
        if self.rating.is_nan() {
            return 0.0;
        }
        self.rating.clamp(0.0, 5.0)
    }
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Place {
        serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Guptar Ghat",
                "slug": "guptar-ghat",
                "category": "historical",
                "description": "Serene ghat on the Sarayu river.",
                "image": "images/guptar-ghat.jpg",
                "rating": 4.4,
                "location": "Faizabad, Ayodhya",
                "coordinates": [26.7901, 82.1722],
                "timings": "Open 24 hours",
                "entryFee": "Free",
                "bestTime": "Evening"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_camel_case_fields() {
        let place = sample();
        assert_eq!(place.id, PlaceId(7));
        assert_eq!(place.entry_fee, "Free");
        assert_eq!(place.best_time, "Evening");
        assert!(place.history.is_none());
        assert!(place.tips.is_none());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let place: Place =
            serde_json::from_str(r#"{"slug": "x", "name": "X"}"#).unwrap();
        assert_eq!(place.rating, 0.0);
        assert!(place.image.is_none());
        assert!(place.lat_lng().is_none());
    }

    #[test]
    fn test_lat_lng_requires_exactly_two_values() {
        let mut place = sample();
        assert_eq!(place.lat_lng(), Some(LatLng::new(26.7901, 82.1722)));

        place.coordinates = Some(vec![26.7]);
        assert!(place.lat_lng().is_none());

        place.coordinates = Some(vec![26.7, 82.1, 0.0]);
        assert!(place.lat_lng().is_none());

        place.coordinates = None;
        assert!(place.lat_lng().is_none());
    }

    #[test]
    fn test_matches_any_text_field() {
        let place = sample();
        assert!(place.matches_lowercase("guptar"));
        assert!(place.matches_lowercase("sarayu"));
        assert!(place.matches_lowercase("histor"));
        assert!(place.matches_lowercase("faizabad"));
        assert!(!place.matches_lowercase("temple"));
    }

    #[test]
    fn test_category_helpers() {
        let place = sample();
        assert!(place.is_in_category("Historical"));
        assert!(!place.is_in_category("temple"));
        assert_eq!(place.category_label(), "Historical");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_clamped_rating() {
        let mut place = sample();
        place.rating = 7.0;
        assert_eq!(place.clamped_rating(), 5.0);
        place.rating = -1.0;
        assert_eq!(place.clamped_rating(), 0.0);
        place.rating = f64::NAN;
        assert_eq!(place.clamped_rating(), 0.0);
    }
}
