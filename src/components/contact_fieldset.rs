//! Contact Fieldset Component
//!
//! Name, email and WhatsApp inputs. Every keystroke goes through the
//! same handler, keyed by the input's `name` attribute.

use leptos::prelude::*;

use crate::store::{store_set_field, use_create_point_store};

#[component]
pub fn ContactFieldset() -> impl IntoView {
    let store = use_create_point_store();

    let on_input = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        store_set_field(&store, &input.name(), input.value());
    };

    view! {
        <fieldset>
            <legend>
                <h2>"Dados"</h2>
            </legend>

            <div class="field">
                <label for="name">"Nome da entidade"</label>
                <input type="text" name="name" id="name" on:input=on_input />
            </div>

            <div class="field-group">
                <div class="field">
                    <label for="email">"Email"</label>
                    <input type="email" name="email" id="email" on:input=on_input />
                </div>
                <div class="field">
                    <label for="whatsapp">"Whatsapp"</label>
                    <input type="text" name="whatsapp" id="whatsapp" on:input=on_input />
                </div>
            </div>
        </fieldset>
    }
}
