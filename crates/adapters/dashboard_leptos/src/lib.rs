use botwatch_app::ClientConfig;
use leptos::prelude::*;

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod runtime;
pub mod view;

use components::Nav;
use pages::Dashboard;

/// Root application component.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    view! {
        <Nav/>
        <main>
            <Dashboard config/>
        </main>
    }
}
