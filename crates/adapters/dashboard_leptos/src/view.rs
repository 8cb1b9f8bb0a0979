//! Signal-backed [`DashboardView`] — the app layer writes, components read.

use botwatch_app::ports::DashboardView;
use botwatch_domain::control::{ButtonState, Control};
use botwatch_domain::status::{StatusDetails, StatusIndicator};
use leptos::html;
use leptos::prelude::*;

/// Element ids of the display targets.
pub mod ids {
    pub const STATUS_INDICATOR: &str = "bot-status-indicator";
    pub const UPTIME: &str = "uptime-display";
    pub const LAST_RESTART: &str = "last-restart-display";
    pub const RESTART_COUNT: &str = "restart-count-display";
    pub const GUILD_COUNT: &str = "guild-count-display";
    pub const SERVER_TIME: &str = "server-time-display";
    pub const LOGS: &str = "logs-display";
    pub const RESTART_BUTTON: &str = "restart-button";
    pub const REFRESH_LOGS_BUTTON: &str = "refresh-logs-button";
}

/// Reactive state of the dashboard page.
///
/// `indicator` and `details` stay `None` until the first status fetch
/// settles.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub indicator: RwSignal<Option<StatusIndicator>>,
    pub details: RwSignal<Option<StatusDetails>>,
    pub log_text: RwSignal<String>,
    pub restart_button: RwSignal<ButtonState>,
    pub refresh_button: RwSignal<ButtonState>,
    /// Scrollable container around the log text.
    pub log_viewport: NodeRef<html::Div>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            indicator: RwSignal::new(None),
            details: RwSignal::new(None),
            log_text: RwSignal::new("Loading logs\u{2026}".to_string()),
            restart_button: RwSignal::new(ButtonState::idle(Control::Restart)),
            refresh_button: RwSignal::new(ButtonState::idle(Control::RefreshLogs)),
            log_viewport: NodeRef::new(),
        }
    }

    /// Signal of a single detail field, `"—"` until known.
    pub fn detail(&self, field: fn(&StatusDetails) -> &String) -> Signal<String> {
        let details = self.details;
        Signal::derive(move || {
            details.with(|d| {
                d.as_ref()
                    .map_or_else(|| "\u{2014}".to_string(), |d| field(d).clone())
            })
        })
    }

    fn button_signal(&self, control: Control) -> RwSignal<ButtonState> {
        match control {
            Control::Restart => self.restart_button,
            Control::RefreshLogs => self.refresh_button,
        }
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView for SignalView {
    fn set_indicator(&self, indicator: StatusIndicator) {
        self.indicator.set(Some(indicator));
    }

    fn set_details(&self, details: &StatusDetails) {
        self.details.set(Some(details.clone()));
    }

    fn set_log_text(&self, text: &str) {
        self.log_text.set(text.to_string());
    }

    fn scroll_logs_to_bottom(&self) {
        // Wait for the new text to be laid out before reading the height.
        if let Some(viewport) = self.log_viewport.get_untracked() {
            request_animation_frame(move || {
                viewport.set_scroll_top(viewport.scroll_height());
            });
        }
    }

    fn set_button(&self, control: Control, state: ButtonState) {
        self.button_signal(control).set(state);
    }
}
