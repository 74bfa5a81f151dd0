use contracts::domain::a001_place::aggregate::Place;
use contracts::domain::a001_place::catalogue::{categories, filter_places, ALL_CATEGORIES};

/// Which filter currently drives the view.
///
/// Text search and category selection are mutually exclusive: applying one
/// resets the other to its default.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ActiveFilter {
    #[default]
    All,
    Search(String),
    Category(String),
}

#[derive(Clone, Debug, Default)]
pub struct PlaceListState {
    /// `None` until the catalogue has been loaded
    catalogue: Option<Vec<Place>>,
    active: ActiveFilter,
    /// Search box text as typed; may be blank while `active` is `All`
    search_text: String,
    visible: Vec<Place>,
}

impl PlaceListState {
    pub fn set_catalogue(&mut self, places: Vec<Place>) {
        self.catalogue = Some(places);
        self.recompute();
    }

    pub fn is_loaded(&self) -> bool {
        self.catalogue.is_some()
    }

    pub fn catalogue(&self) -> &[Place] {
        self.catalogue.as_deref().unwrap_or_default()
    }

    pub fn visible(&self) -> &[Place] {
        &self.visible
    }

    pub fn active(&self) -> &ActiveFilter {
        &self.active
    }

    pub fn search(&mut self, query: &str) {
        self.search_text = query.to_string();
        self.active = if query.trim().is_empty() {
            ActiveFilter::All
        } else {
            ActiveFilter::Search(query.to_string())
        };
        self.recompute();
    }

    pub fn filter_by_category(&mut self, category: &str) {
        self.search_text.clear();
        self.active = if category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            ActiveFilter::All
        } else {
            ActiveFilter::Category(category.to_string())
        };
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.search_text.clear();
        self.active = ActiveFilter::All;
        self.recompute();
    }

    /// Text shown in the search box
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Category selector value, `"all"` unless a category filter is active
    pub fn active_category(&self) -> &str {
        match &self.active {
            ActiveFilter::Category(c) => c,
            _ => ALL_CATEGORIES,
        }
    }

    /// Filter buttons: "all" followed by the catalogue's categories
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(categories(self.catalogue()))
            .collect()
    }

    fn recompute(&mut self) {
        let catalogue = self.catalogue();
        let visible = match &self.active {
            ActiveFilter::All => catalogue.to_vec(),
            ActiveFilter::Search(q) => filter_places(catalogue, Some(q), None),
            ActiveFilter::Category(c) => filter_places(catalogue, None, Some(c)),
        };
        self.visible = visible;
    }
}
