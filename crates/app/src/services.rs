//! Dashboard use-cases.
//!
//! Each module adds an `impl` block to [`DashboardClient`](crate::client::DashboardClient),
//! so all behaviours share the same context and the same fetch/render paths.

pub mod action_controller;
pub mod log_poller;
pub mod status_poller;
