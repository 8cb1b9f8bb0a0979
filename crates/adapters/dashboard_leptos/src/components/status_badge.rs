//! Online / offline / unknown badge.

use botwatch_domain::status::StatusIndicator;
use leptos::prelude::*;

use crate::view::ids;

/// The status indicator. Shows a neutral "checking" badge until the first
/// status fetch settles.
#[component]
pub fn StatusBadge(indicator: RwSignal<Option<StatusIndicator>>) -> impl IntoView {
    let class = move || {
        indicator
            .get()
            .map_or("badge bg-secondary", StatusIndicator::badge_class)
    };
    let label = move || {
        indicator
            .get()
            .map_or("Checking\u{2026}", StatusIndicator::label)
    };

    view! {
        <div id=ids::STATUS_INDICATOR>
            <span class=class>{label}</span>
        </div>
    }
}
