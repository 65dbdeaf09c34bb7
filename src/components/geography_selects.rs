//! UF and City Select Components

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::PLACEHOLDER_VALUE;
use crate::store::{
    store_apply_cities, store_select_city, store_select_uf, use_create_point_store,
    CreatePointStateStoreFields,
};

/// State select; picking a UF fetches its municipalities
#[component]
pub fn UfSelect() -> impl IntoView {
    let store = use_create_point_store();

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let Some(uf) = store_select_uf(&store, &value) else {
            return;
        };
        spawn_local(async move {
            match api::list_cities(&uf).await {
                Ok(cities) => {
                    let count = cities.len();
                    if store_apply_cities(&store, &uf, cities) {
                        log::debug!("Loaded {} cities for {}", count, uf);
                    } else {
                        log::debug!("Dropped stale city list for {}", uf);
                    }
                }
                Err(e) => log::warn!("Failed to load cities for {}: {}", uf, e),
            }
        });
    };

    view! {
        <div class="field">
            <label for="uf">"Estado(UF)"</label>
            <select name="uf" id="uf" on:change=on_change>
                <option value=PLACEHOLDER_VALUE>"Selecione uma UF"</option>
                <For
                    each=move || store.geography().read().ufs.clone()
                    key=|uf| uf.clone()
                    children=move |uf| view! { <option value=uf.clone()>{uf.clone()}</option> }
                />
            </select>
        </div>
    }
}

/// City select, listing the municipalities of the selected UF
#[component]
pub fn CitySelect() -> impl IntoView {
    let store = use_create_point_store();

    view! {
        <div class="field">
            <label for="city">"Cidade"</label>
            <select
                name="city"
                id="city"
                on:change=move |ev| store_select_city(&store, &event_target_value(&ev))
            >
                <option value=PLACEHOLDER_VALUE>"Selecione uma cidade"</option>
                <For
                    each=move || store.geography().read().cities.clone()
                    key=|city| city.clone()
                    children=move |city| view! { <option value=city.clone()>{city.clone()}</option> }
                />
            </select>
        </div>
    }
}
