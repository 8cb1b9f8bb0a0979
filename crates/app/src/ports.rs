//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the dashboard use-cases and the outside
//! world: the bot backend, the rendered page, the browser's blocking dialogs
//! and its task scheduler.
//!
//! None of the returned futures are `Send`: the dashboard runs on a single
//! event loop and browser `fetch` futures cannot leave it.

pub mod api;
pub mod dialogs;
pub mod runtime;
pub mod view;

pub use api::BotApi;
pub use dialogs::Dialogs;
pub use runtime::Runtime;
pub use view::DashboardView;
