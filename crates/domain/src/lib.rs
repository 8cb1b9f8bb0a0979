//! # botwatch-domain
//!
//! Pure domain model for the botwatch status dashboard.
//!
//! ## Responsibilities
//! - Define the **status snapshot** reported by the bot backend and its
//!   projection onto display text
//! - Define the **log batch** and how it turns into the log view content
//! - Define the **controls** (restart, refresh logs) and their
//!   `Idle → Pending → Idle` state machine
//! - Error conventions shared by the other crates
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod control;
pub mod logs;
pub mod restart;
pub mod status;
