//! Ecoleta Frontend App
//!
//! Router with the home page and the collection point form.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{CreatePoint, Home};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <h1>"Página não encontrada"</h1> }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/create-point") view=CreatePoint />
            </Routes>
        </Router>
    }
}
