//! Stat card component for displaying a labelled status field.

use leptos::prelude::*;

/// A card displaying a label and a text value.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// Element id of the value, part of the page's display contract.
    id: &'static str,
    /// The text to display, written verbatim.
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value" id=id>{move || value.get()}</span>
        </div>
    }
}
