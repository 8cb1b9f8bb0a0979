//! Dialogs port — blocking yes/no prompts and alerts.

/// Modal dialogs that block the event loop until dismissed.
pub trait Dialogs {
    /// Ask a yes/no question. Returns `true` when the user accepts.
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user has to acknowledge.
    fn alert(&self, message: &str);
}
