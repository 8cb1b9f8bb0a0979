//! Scrollable log viewport.

use leptos::html;
use leptos::prelude::*;

use crate::view::ids;

/// Log text inside a fixed-height scrollable container.
///
/// The container is the element referenced by `viewport`; the app layer
/// scrolls it to the bottom after each non-empty fetch.
#[component]
pub fn LogPanel(text: RwSignal<String>, viewport: NodeRef<html::Div>) -> impl IntoView {
    view! {
        <div class="log-viewport" node_ref=viewport>
            <pre id=ids::LOGS class="log-text">{move || text.get()}</pre>
        </div>
    }
}
