//! Page Header Component

use leptos::prelude::*;
use leptos_router::components::A;

/// Logo plus a link back to the home page
#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header>
            <img src="/assets/logo.svg" alt="Ecoleta" />
            <A href="/">
                <span class="icon-back">"⏮"</span>
                "Voltar para home"
            </A>
        </header>
    }
}
