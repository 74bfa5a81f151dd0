pub mod leaflet_sink;
pub mod marker;

use leptos::prelude::*;

pub const MAP_CONTAINER_ID: &str = "map";

/// Map panel with the "Reset Map" / "Show All" controls
#[component]
pub fn PlaceMap(
    container: NodeRef<leptos::html::Div>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="map-section" id="map-section">
            <div class="section-header">
                <h2>"Explore on the Map"</h2>
                <div class="map-controls">
                    <button class="btn btn-secondary" id="resetMap" on:click=move |_| on_reset.run(())>
                        "Reset Map"
                    </button>
                    <button class="btn btn-secondary" id="showAll" on:click=move |_| on_reset.run(())>
                        "Show All"
                    </button>
                </div>
            </div>
            <div id=MAP_CONTAINER_ID class="map-container" node_ref=container></div>
        </section>
    }
}
