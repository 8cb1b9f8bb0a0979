//! # botwatch-app
//!
//! Application layer — dashboard use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `BotApi` — the `/api/status`, `/api/logs` and `/api/restart` endpoints
//!   - `DashboardView` — the display targets of the page
//!   - `Dialogs` — blocking confirm/alert prompts
//!   - `Runtime` — background tasks and timers
//! - Provide the **use-cases** on [`DashboardClient`](client::DashboardClient):
//!   - status poller — badge and detail fields, every 10 s
//!   - log poller — log view, every 30 s and on demand
//!   - action controller — restart and refresh buttons with their lock timers
//! - Load and validate the client configuration
//!
//! ## Dependency rule
//! Depends on `botwatch-domain` only. Never imports adapter crates or browser
//! APIs; adapters depend on *this* crate, not the reverse.

pub mod client;
pub mod config;
pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;

pub use client::DashboardClient;
pub use config::{ClientConfig, ConfigError};
