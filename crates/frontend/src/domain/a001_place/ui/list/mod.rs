pub mod controller;
pub mod state;

use self::controller::{CardSink, GuideController};
use crate::domain::a001_place::ui::card::model::{CardModel, NO_RESULTS_MESSAGE};
use crate::domain::a001_place::ui::card::PlaceCard;
use crate::domain::a001_place::ui::map::leaflet_sink::LeafletSink;
use crate::domain::a001_place::ui::map::{PlaceMap, MAP_CONTAINER_ID};
use crate::routes::routes::PageKind;
use crate::shared::api_utils::page_relative;
use crate::shared::catalogue::load_catalogue;
use crate::shared::config::SiteConfig;
use crate::shared::icons::icon;
use contracts::domain::a001_place::aggregate::capitalize_first;
use leptos::prelude::*;

/// Signals the main page renders from
#[derive(Clone, Copy)]
pub struct CardsView {
    /// `None` while the catalogue is loading
    pub cards: RwSignal<Option<Vec<CardModel>>>,
    pub query: RwSignal<String>,
    pub category: RwSignal<String>,
    pub options: RwSignal<Vec<String>>,
}

impl CardsView {
    pub fn new() -> Self {
        Self {
            cards: RwSignal::new(None),
            query: RwSignal::new(String::new()),
            category: RwSignal::new("all".to_string()),
            options: RwSignal::new(vec!["all".to_string()]),
        }
    }
}

impl Default for CardsView {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSink for CardsView {
    fn render_cards(&mut self, cards: Vec<CardModel>) {
        self.cards.set(Some(cards));
    }

    fn sync_filters(&mut self, query: &str, category: &str, options: Vec<String>) {
        self.query.set(query.to_string());
        self.category.set(category.to_lowercase());
        self.options.set(options);
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PlaceList() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig not found in context");
    let view_state = CardsView::new();
    let controller = StoredValue::new_local(GuideController::<CardsView, LeafletSink>::new(
        view_state,
        config.default_image.clone(),
        config.fit_padding,
    ));
    let map_ref = NodeRef::<leptos::html::Div>::new();
    let search_ref = NodeRef::<leptos::html::Input>::new();

    // Одна загрузка каталога на страницу
    let data_url = page_relative(PageKind::Main, &config.data_path);
    wasm_bindgen_futures::spawn_local(async move {
        let places = load_catalogue(&data_url).await;
        controller.try_update_value(|c| c.load(places));
    });

    // Leaflet needs the container in the DOM
    let map_config = config.clone();
    Effect::new(move |_| {
        if map_ref.get().is_none() {
            return;
        }
        controller.update_value(|c| {
            if c.map().is_some() {
                return;
            }
            match LeafletSink::mount(MAP_CONTAINER_ID, &map_config) {
                Ok(sink) => c.attach_map(sink),
                Err(e) => log::warn!("Map unavailable: {}", e),
            }
        });
    });

    let on_search = move |query: String| controller.update_value(|c| c.search(&query));
    let on_category = move |category: String| controller.update_value(|c| c.filter_by_category(&category));
    let on_reset = Callback::new(move |_: ()| controller.update_value(|c| c.reset()));

    view! {
        <section class="search-section">
            <div class="search-container">
                <input
                    type="text"
                    id="searchInput"
                    class="search-input"
                    placeholder="Search temples, ghats, museums..."
                    node_ref=search_ref
                    prop:value=move || view_state.query.get()
                    on:input=move |ev| on_search(event_target_value(&ev))
                />
                <button
                    class="btn btn-primary search-btn"
                    id="searchBtn"
                    on:click=move |_| {
                        let query = search_ref.get().map(|input| input.value()).unwrap_or_default();
                        on_search(query);
                    }
                >
                    {icon("search")}
                    "Search"
                </button>
            </div>
            <div class="filter-buttons">
                <For
                    each=move || view_state.options.get()
                    key=|option| option.clone()
                    children=move |option| {
                        let label = capitalize_first(&option);
                        let filter_attr = option.clone();
                        let value = option.clone();
                        view! {
                            <button
                                class=move || {
                                    if view_state.category.get() == option {
                                        "filter-btn active"
                                    } else {
                                        "filter-btn"
                                    }
                                }
                                data-filter=filter_attr
                                on:click=move |_| on_category(value.clone())
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>
        </section>

        <section class="attractions-section">
            <h2>"Top Attractions"</h2>
            <div class="attractions-grid" id="attractionsGrid">
                {move || match view_state.cards.get() {
                    None => view! { <p class="loading">"Loading attractions..."</p> }.into_any(),
                    Some(cards) if cards.is_empty() => {
                        view! { <p class="no-results">{NO_RESULTS_MESSAGE}</p> }.into_any()
                    }
                    Some(cards) => cards
                        .into_iter()
                        .map(|card| view! { <PlaceCard card=card /> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </section>

        <PlaceMap container=map_ref on_reset=on_reset />
    }
}
