//! Main page controller: catalogue → filter → {cards, map}.
//!
//! Rendering targets are traits so the flow runs without a DOM or Leaflet.

use super::state::PlaceListState;
use crate::domain::a001_place::ui::card::model::CardModel;
use crate::domain::a001_place::ui::map::marker::{project_markers, MarkerSpec};
use contracts::domain::a001_place::aggregate::Place;
use contracts::shared::geo::Bounds;

pub trait CardSink {
    /// Replace the rendered list; an empty slice is the "no results" state
    fn render_cards(&mut self, cards: Vec<CardModel>);

    /// Reflect the active filter in the search box and category buttons
    fn sync_filters(&mut self, query: &str, category: &str, options: Vec<String>);
}

pub trait MapSink {
    fn clear_markers(&mut self);
    fn add_marker(&mut self, marker: &MarkerSpec);
    fn fit_bounds(&mut self, bounds: &Bounds);
}

pub struct GuideController<C: CardSink, M: MapSink> {
    state: PlaceListState,
    cards: C,
    map: Option<M>,
    default_image: String,
    fit_padding: f64,
}

impl<C: CardSink, M: MapSink> GuideController<C, M> {
    pub fn new(cards: C, default_image: impl Into<String>, fit_padding: f64) -> Self {
        Self {
            state: PlaceListState::default(),
            cards,
            map: None,
            default_image: default_image.into(),
            fit_padding,
        }
    }

    pub fn state(&self) -> &PlaceListState {
        &self.state
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn cards(&self) -> &C {
        &self.cards
    }

    pub fn load(&mut self, places: Vec<Place>) {
        log::info!("Catalogue ready: {} places", places.len());
        self.state.set_catalogue(places);
        self.render_list();
        self.render_markers(false);
    }

    /// Attach the map once its container exists; markers for the current view are placed immediately.
    pub fn attach_map(&mut self, map: M) {
        self.map = Some(map);
        if self.state.is_loaded() {
            self.render_markers(false);
        }
    }

    pub fn search(&mut self, query: &str) {
        self.state.search(query);
        self.refresh();
    }

    pub fn filter_by_category(&mut self, category: &str) {
        self.state.filter_by_category(category);
        self.refresh();
    }

    /// "Reset map" / "Show all": full catalogue, default filters, list and markers together
    pub fn reset(&mut self) {
        self.state.reset();
        self.refresh();
    }

    fn refresh(&mut self) {
        if !self.state.is_loaded() {
            return;
        }
        self.render_list();
        self.render_markers(true);
    }

    fn render_list(&mut self) {
        let cards = self
            .state
            .visible()
            .iter()
            .map(|p| CardModel::from_place(p, &self.default_image))
            .collect();
        self.cards.render_cards(cards);
        self.cards.sync_filters(
            self.state.search_text(),
            self.state.active_category(),
            self.state.category_options(),
        );
    }

    fn render_markers(&mut self, fit: bool) {
        let Some(map) = self.map.as_mut() else {
            return;
        };
        let (markers, bounds) =
            project_markers(self.state.visible(), &self.default_image, self.fit_padding);

        map.clear_markers();
        for marker in &markers {
            map.add_marker(marker);
        }
        if let (true, Some(bounds)) = (fit, bounds) {
            map.fit_bounds(&bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_place::seed::seed_places;

    #[derive(Default)]
    struct RecordingCards {
        cards: Vec<CardModel>,
        renders: usize,
        query: String,
        category: String,
        options: Vec<String>,
    }

    impl CardSink for RecordingCards {
        fn render_cards(&mut self, cards: Vec<CardModel>) {
            self.cards = cards;
            self.renders += 1;
        }

        fn sync_filters(&mut self, query: &str, category: &str, options: Vec<String>) {
            self.query = query.to_string();
            self.category = category.to_string();
            self.options = options;
        }
    }

    #[derive(Default)]
    struct RecordingMap {
        markers: Vec<MarkerSpec>,
        clears: usize,
        fitted: Option<Bounds>,
        fits: usize,
    }

    impl MapSink for RecordingMap {
        fn clear_markers(&mut self) {
            self.markers.clear();
            self.clears += 1;
        }

        fn add_marker(&mut self, marker: &MarkerSpec) {
            self.markers.push(marker.clone());
        }

        fn fit_bounds(&mut self, bounds: &Bounds) {
            self.fitted = Some(*bounds);
            self.fits += 1;
        }
    }

    fn catalogue() -> Vec<Place> {
        let mut places = seed_places();
        places[1].coordinates = Some(vec![26.7950, 82.2000]);
        places[2].coordinates = Some(vec![26.8030, 82.2100]);

        let mut ghat = places[0].clone();
        ghat.slug = "guptar-ghat".into();
        ghat.name = "Guptar Ghat".into();
        ghat.category = "historical".into();
        ghat.description = "Ghat on the Sarayu.".into();
        ghat.coordinates = None;
        places.push(ghat);
        places
    }

    fn controller() -> GuideController<RecordingCards, RecordingMap> {
        let mut c = GuideController::new(RecordingCards::default(), "images/default-temple.jpg", 0.1);
        c.load(catalogue());
        c.attach_map(RecordingMap::default());
        c
    }

    fn card_slugs(c: &GuideController<RecordingCards, RecordingMap>) -> Vec<String> {
        c.cards().cards.iter().map(|card| card.place.slug.clone()).collect()
    }

    fn marker_slugs(c: &GuideController<RecordingCards, RecordingMap>) -> Vec<String> {
        c.map().unwrap().markers.iter().map(|m| m.slug.clone()).collect()
    }

    #[test]
    fn test_load_renders_all_cards_and_markers() {
        let c = controller();
        assert_eq!(c.cards().cards.len(), 4);
        assert_eq!(c.cards().options, vec!["all", "temple", "historical"]);
        // guptar-ghat has no coordinates
        assert_eq!(c.map().unwrap().markers.len(), 3);
        assert_eq!(c.map().unwrap().fits, 0);
    }

    #[test]
    fn test_search_replaces_cards_and_markers() {
        let mut c = controller();
        c.search("kanak");
        assert_eq!(card_slugs(&c), vec!["kanak-bhawan"]);
        assert_eq!(marker_slugs(&c), vec!["kanak-bhawan"]);
        assert_eq!(c.cards().query, "kanak");

        let map = c.map().unwrap();
        assert_eq!(map.clears, 2);
        assert_eq!(map.fits, 1);
        let only = map.markers[0].position;
        assert_eq!(map.fitted, Some(Bounds { south_west: only, north_east: only }));
    }

    #[test]
    fn test_zero_markers_leaves_viewport() {
        let mut c = controller();
        c.search("temple");
        let fits = c.map().unwrap().fits;

        c.filter_by_category("historical");
        assert_eq!(card_slugs(&c), vec!["guptar-ghat"]);
        assert!(c.map().unwrap().markers.is_empty());
        assert_eq!(c.map().unwrap().fits, fits);
        assert_eq!(c.cards().query, "");
        assert_eq!(c.cards().category, "historical");
    }

    #[test]
    fn test_empty_result_renders_empty_list() {
        let mut c = controller();
        c.search("no such place anywhere");
        assert!(c.cards().cards.is_empty());
        assert!(c.map().unwrap().markers.is_empty());
    }

    #[test]
    fn test_blank_search_echoes_typed_text() {
        let mut c = controller();
        c.search(" ");
        assert_eq!(c.cards().query, " ");
        assert_eq!(c.cards().cards.len(), 4);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut c = controller();
        c.filter_by_category("temple");
        c.search("hanuman");
        c.reset();

        assert_eq!(
            card_slugs(&c),
            vec!["ram-janmabhoomi-temple", "hanuman-garhi", "kanak-bhawan", "guptar-ghat"]
        );
        assert_eq!(
            marker_slugs(&c),
            vec!["ram-janmabhoomi-temple", "hanuman-garhi", "kanak-bhawan"]
        );
        assert_eq!(c.cards().category, "all");
        assert_eq!(c.cards().query, "");
    }

    #[test]
    fn test_filters_before_load_do_nothing() {
        let mut c: GuideController<RecordingCards, RecordingMap> =
            GuideController::new(RecordingCards::default(), "images/default-temple.jpg", 0.1);
        c.attach_map(RecordingMap::default());
        c.search("hanuman");
        assert_eq!(c.cards().renders, 0);
        assert_eq!(c.map().unwrap().clears, 0);
        assert!(!c.state().is_loaded());
    }
}
