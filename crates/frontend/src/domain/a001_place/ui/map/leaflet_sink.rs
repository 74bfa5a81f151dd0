use super::marker::MarkerSpec;
use crate::domain::a001_place::ui::list::controller::MapSink;
use crate::shared::config::SiteConfig;
use crate::shared::leaflet::{self, Layer, LeafletMap};
use contracts::shared::geo::Bounds;
use serde::Serialize;
use wasm_bindgen::JsValue;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DivIconOptions<'a> {
    class_name: &'a str,
    html: String,
    icon_size: [u32; 2],
    icon_anchor: [u32; 2],
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(value).map_err(|e| format!("{}", e))
}

/// Leaflet-backed map; owns the marker layers it placed
pub struct LeafletSink {
    map: LeafletMap,
    markers: Vec<Layer>,
}

impl LeafletSink {
    /// Create the map inside the element with id `container_id`
    pub fn mount(container_id: &str, config: &SiteConfig) -> Result<Self, String> {
        let map = leaflet::create_map(container_id).map_err(|e| format!("L.map failed: {:?}", e))?;
        map.set_view(&to_js(&config.map_center)?, config.map_zoom);

        leaflet::tile_layer(
            &config.tile_url,
            &to_js(&TileOptions {
                attribution: &config.tile_attribution,
            })?,
        )
        .add_to(&map);
        leaflet::scale_control().add_control_to(&map);

        Ok(Self {
            map,
            markers: Vec::new(),
        })
    }

    fn build_marker(&self, spec: &MarkerSpec) -> Result<Layer, String> {
        let icon = leaflet::div_icon(&to_js(&DivIconOptions {
            class_name: "custom-marker",
            html: spec.icon_html(),
            icon_size: [20, 20],
            icon_anchor: [10, 10],
        })?);

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("icon"), &icon)
            .map_err(|e| format!("{:?}", e))?;

        let position = to_js(&[spec.position.lat, spec.position.lng])?;
        Ok(leaflet::marker(&position, &options)
            .add_to(&self.map)
            .bind_popup(&spec.popup_html))
    }
}

impl MapSink for LeafletSink {
    fn clear_markers(&mut self) {
        for marker in self.markers.drain(..) {
            self.map.remove_layer(&marker);
        }
    }

    fn add_marker(&mut self, spec: &MarkerSpec) {
        match self.build_marker(spec) {
            Ok(layer) => self.markers.push(layer),
            Err(e) => log::warn!("Failed to place marker '{}': {}", spec.slug, e),
        }
    }

    fn fit_bounds(&mut self, bounds: &Bounds) {
        match to_js(&bounds.to_corner_array()) {
            Ok(js) => self.map.fit_bounds(&js),
            Err(e) => log::warn!("Failed to fit bounds: {}", e),
        }
    }
}

impl Drop for LeafletSink {
    fn drop(&mut self) {
        self.map.remove();
    }
}
