use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <span class="brand">"botwatch"</span>
            <span class="hint">"Bot status dashboard"</span>
        </nav>
    }
}
