//! Location Picker Component
//!
//! Leaflet map with a single marker at the stored position. Clicking the
//! map moves the position; any position change moves marker and view.

use leptos::html::Div;
use leptos::prelude::*;

use crate::config::{MAP_ZOOM, TILE_ATTRIBUTION, TILE_URL};
use crate::leaflet::PickerMap;
use crate::store::{store_set_position, use_create_point_store, CreatePointStateStoreFields};

#[component]
pub fn LocationPicker() -> impl IntoView {
    let store = use_create_point_store();
    let map_ref = NodeRef::<Div>::new();

    // Mount once the container exists, then follow the position
    Effect::new(move |picker: Option<Option<PickerMap>>| {
        let position = store.position().get();
        let picker = picker.flatten().or_else(|| {
            let element = map_ref.get()?;
            match PickerMap::mount(&element, position, MAP_ZOOM, TILE_URL, TILE_ATTRIBUTION) {
                Ok(map) => {
                    map.on_click(move |latlng| store_set_position(&store, latlng));
                    Some(map)
                }
                Err(e) => {
                    log::error!("Failed to mount map: {}", e);
                    None
                }
            }
        });
        if let Some(map) = &picker {
            map.move_marker(position);
            map.recenter(position);
        }
        picker
    });

    view! { <div id="map" class="leaflet-container" node_ref=map_ref></div> }
}
