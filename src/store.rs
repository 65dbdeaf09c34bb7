//! CreatePoint Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store per
//! mounted page; dropped with it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, LatLng, PointPayload};
use crate::point_form::{self, FormInput, Geography};

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CreatePointState {
    /// Material catalog from the backend
    pub items: Vec<Item>,
    /// Selected item ids, in click order
    pub selected_items: Vec<u32>,
    /// UF list, cities of the selected UF, and the chosen pair
    pub geography: Geography,
    /// Marker position; starts at (0, 0)
    pub position: LatLng,
    /// Contact fields
    pub input: FormInput,
}

/// Type alias for the store
pub type CreatePointStore = Store<CreatePointState>;

/// Get the page store from context
pub fn use_create_point_store() -> CreatePointStore {
    expect_context::<CreatePointStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_toggle_item(store: &CreatePointStore, id: u32) {
    point_form::toggle_item(&mut store.selected_items().write(), id);
}

pub fn store_set_field(store: &CreatePointStore, field: &str, value: String) {
    if !store.input().write().set_field(field, value) {
        log::warn!("Ignoring input with unknown name '{}'", field);
    }
}

/// Returns the UF whose cities should be fetched
pub fn store_select_uf(store: &CreatePointStore, value: &str) -> Option<String> {
    store.geography().write().select_uf(value)
}

// Setters below run when a request settles and may find the page gone.

pub fn store_set_items(store: &CreatePointStore, items: Vec<Item>) {
    store.items().try_set(items);
}

pub fn store_set_ufs(store: &CreatePointStore, ufs: Vec<String>) {
    if let Some(mut geography) = store.geography().try_write() {
        geography.ufs = ufs;
    }
}

pub fn store_apply_cities(store: &CreatePointStore, uf: &str, cities: Vec<String>) -> bool {
    store
        .geography()
        .try_write()
        .is_some_and(|mut geography| geography.apply_cities(uf, cities))
}

pub fn store_select_city(store: &CreatePointStore, value: &str) {
    store.geography().write().select_city(value);
}

pub fn store_set_position(store: &CreatePointStore, position: LatLng) {
    store.position().try_set(position);
}

/// Snapshot the current state into a submission body
pub fn store_payload(store: &CreatePointStore) -> PointPayload {
    point_form::build_payload(
        &store.input().read_untracked(),
        &store.geography().read_untracked(),
        store.position().get_untracked(),
        &store.selected_items().read_untracked(),
    )
}
