//! Button bound to a control's lock state.

use botwatch_domain::control::ButtonState;
use leptos::prelude::*;

/// A button whose label and `disabled` flag follow `state`.
#[component]
pub fn ActionButton(
    /// Element id, part of the page's display contract.
    id: &'static str,
    state: RwSignal<ButtonState>,
    /// Click handler; not called while the button is disabled.
    on_click: impl Fn() + Send + 'static,
    #[prop(default = "btn")] class: &'static str,
) -> impl IntoView {
    let disabled = move || state.get().disabled;
    let label = move || state.get().label;

    view! {
        <button
            id=id
            class=class
            disabled=disabled
            on:click=move |_| on_click()
        >
            {label}
        </button>
    }
}
