use super::aggregate::Place;
use anyhow::Context;

/// Category selector value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Parse the raw `places.json` body.
pub fn parse_catalogue(json: &str) -> anyhow::Result<Vec<Place>> {
    serde_json::from_str(json).context("places.json is not a valid array of places")
}

/// Derive the visible subset of `catalogue`.
///
/// The query is matched as typed, surrounding whitespace included.
/// A whitespace-only `query` and a missing or `"all"` `category` are no-ops; when both
/// are active a place must satisfy both. Catalogue order is preserved.
pub fn filter_places(catalogue: &[Place], query: Option<&str>, category: Option<&str>) -> Vec<Place> {
    let needle = query
        .filter(|q| !q.trim().is_empty())
        .map(str::to_lowercase);
    let category = category.filter(|c| !c.eq_ignore_ascii_case(ALL_CATEGORIES));

    catalogue
        .iter()
        .filter(|p| needle.as_deref().map_or(true, |n| p.matches_lowercase(n)))
        .filter(|p| category.map_or(true, |c| p.is_in_category(c)))
        .cloned()
        .collect()
}

/// Distinct categories in first-seen order.
pub fn categories(catalogue: &[Place]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for place in catalogue {
        let key = place.category.to_lowercase();
        if !key.is_empty() && !seen.contains(&key) {
            seen.push(key);
        }
    }
    seen
}

pub fn find_by_slug<'a>(catalogue: &'a [Place], slug: &str) -> Option<&'a Place> {
    catalogue.iter().find(|p| p.slug == slug)
}
