//! Common error types used across the workspace.
//!
//! Each failure family is its own typed enum; callers match on the variant
//! instead of inspecting messages.

use crate::control::Control;

/// A request to the bot backend that did not produce a usable payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never completed (network down, CORS, aborted, …).
    #[error("request failed: {0}")]
    Transport(String),
    /// The response arrived but its body is not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// A control transition that is not allowed from the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    #[error("{0} is already pending")]
    AlreadyPending(Control),
}
