//! CreatePoint Page
//!
//! Registration form for a waste-collection point. Owns the page store,
//! loads the reference lists on mount and posts the point on submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;

use crate::api;
use crate::components::{CitySelect, ContactFieldset, ItemsGrid, LocationPicker, PageHeader, UfSelect};
use crate::geolocation;
use crate::point_form::SubmitOutcome;
use crate::store::{
    store_payload, store_set_items, store_set_position, store_set_ufs, CreatePointState,
    CreatePointStore,
};

#[component]
pub fn CreatePoint() -> impl IntoView {
    let store: CreatePointStore = Store::new(CreatePointState::default());
    provide_context(store);

    // Device position, once
    Effect::new(move |_| {
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok(position) => store_set_position(&store, position),
                Err(e) => log::warn!("Keeping default position: {}", e),
            }
        });
    });

    // Material catalog
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_items().await {
                Ok(items) => {
                    log::debug!("Loaded {} items", items.len());
                    store_set_items(&store, items);
                }
                Err(e) => log::warn!("Failed to load items: {}", e),
            }
        });
    });

    // UF list
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_ufs().await {
                Ok(ufs) => store_set_ufs(&store, ufs),
                Err(e) => log::warn!("Failed to load UFs: {}", e),
            }
        });
    });

    let navigate = use_navigate();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = store_payload(&store);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::create_point(&payload).await;
            if let Err(e) = &result {
                log::warn!("Point registration failed: {}", e);
            }
            let outcome = SubmitOutcome::from_result(&result);
            let _ = window().alert_with_message(outcome.alert);
            if outcome.navigate_home {
                navigate("/", Default::default());
            }
        });
    };

    view! {
        <div id="page-create-point">
            <PageHeader />

            <form on:submit=on_submit>
                <h1>"Cadastro do " <br /> " ponto de coleta."</h1>

                <ContactFieldset />

                <fieldset>
                    <legend>
                        <h2>"Endereço"</h2>
                        <span>"Selecione o endereço no mapa."</span>
                    </legend>

                    <LocationPicker />

                    <div class="field-group">
                        <UfSelect />
                    </div>
                    <div class="field-group">
                        <CitySelect />
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Itens de coleta"</h2>
                        <span>"Selecione um ou mais itens abaixo"</span>
                    </legend>
                    <ItemsGrid />
                </fieldset>

                <button type="submit">"Cadastrar ponto de coleta"</button>
            </form>
        </div>
    }
}
