//! View port — the display targets the dashboard writes into.

use botwatch_domain::control::{ButtonState, Control};
use botwatch_domain::status::{StatusDetails, StatusIndicator};

/// The rendered dashboard page.
///
/// Every method replaces what was shown before; nothing is appended.
pub trait DashboardView {
    /// Switch the status badge.
    fn set_indicator(&self, indicator: StatusIndicator);

    /// Write the five status detail fields as plain text.
    fn set_details(&self, details: &StatusDetails);

    /// Replace the content of the log view.
    fn set_log_text(&self, text: &str);

    /// Scroll the log viewport to its maximum offset.
    fn scroll_logs_to_bottom(&self);

    /// Render a control's button.
    fn set_button(&self, control: Control, state: ButtonState);
}
