//! Leaflet FFI
//!
//! Bindings to the global `L` object loaded by `index.html`.
//! Only the calls the location picker needs.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::LatLng;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn create_map(element: &web_sys::HtmlElement) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = panTo)]
    fn pan_to(this: &LeafletMap, center: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;
}

#[wasm_bindgen]
extern "C" {
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn create_tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn create_marker(position: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, position: &JsValue) -> Marker;
}

#[wasm_bindgen]
extern "C" {
    pub type LeafletMouseEvent;

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &LeafletMouseEvent) -> LeafletLatLng;
}

#[wasm_bindgen]
extern "C" {
    pub type LeafletLatLng;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &LeafletLatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &LeafletLatLng) -> f64;
}

#[derive(Serialize)]
struct TileLayerOptions<'a> {
    attribution: &'a str,
}

fn lat_lng_array(position: LatLng) -> JsValue {
    js_sys::Array::of2(&position.latitude.into(), &position.longitude.into()).into()
}

/// A map with one tile layer and one marker
pub struct PickerMap {
    map: LeafletMap,
    marker: Marker,
}

impl PickerMap {
    pub fn mount(
        element: &web_sys::HtmlElement,
        center: LatLng,
        zoom: f64,
        tile_url: &str,
        attribution: &str,
    ) -> Result<Self, String> {
        let options = serde_wasm_bindgen::to_value(&TileLayerOptions { attribution })
            .map_err(|e| e.to_string())?;
        let map = create_map(element);
        map.set_view(&lat_lng_array(center), zoom);
        create_tile_layer(tile_url, &options).add_to(&map);
        let marker = create_marker(&lat_lng_array(center));
        marker.add_to(&map);
        Ok(Self { map, marker })
    }

    /// Register a click handler for the page's lifetime
    pub fn on_click(&self, handler: impl Fn(LatLng) + 'static) {
        let cb = Closure::<dyn FnMut(LeafletMouseEvent)>::new(move |ev: LeafletMouseEvent| {
            let latlng = ev.latlng();
            handler(LatLng::new(latlng.lat(), latlng.lng()));
        });
        self.map.on("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    pub fn move_marker(&self, position: LatLng) {
        self.marker.set_lat_lng(&lat_lng_array(position));
    }

    pub fn recenter(&self, position: LatLng) {
        self.map.pan_to(&lat_lng_array(position));
    }
}
