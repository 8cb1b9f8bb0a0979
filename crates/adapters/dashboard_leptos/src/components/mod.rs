mod action_button;
mod log_panel;
mod nav;
mod stat_card;
mod status_badge;

pub use action_button::ActionButton;
pub use log_panel::LogPanel;
pub use nav::Nav;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
