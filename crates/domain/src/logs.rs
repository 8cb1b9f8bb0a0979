//! Log batch — the most recent log lines of the bot, and how they are shown.

use serde::{Deserialize, Serialize};

/// Placeholder shown when the backend returned no lines.
pub const NO_LOGS_MESSAGE: &str = "No logs available.";

/// Placeholder shown when the log fetch failed.
pub const LOGS_FAILED_MESSAGE: &str = "Failed to load logs. Please try again.";

/// Payload of `GET /api/logs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogBatch {
    /// Lines in chronological order; each carries its own line ending.
    #[serde(default)]
    pub logs: Vec<String>,
    /// Set by the backend when it could not read its log file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogBatch {
    #[must_use]
    pub fn new(logs: Vec<String>) -> Self {
        Self { logs, error: None }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

/// Content of the log view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDisplay {
    /// Concatenated log lines.
    Lines(String),
    /// The fetch succeeded but there was nothing to show.
    Empty,
    /// The fetch failed.
    Unavailable,
}

impl LogDisplay {
    /// Build the display from a successful fetch.
    ///
    /// Lines are joined without a separator.
    #[must_use]
    pub fn from_batch(batch: &LogBatch) -> Self {
        if batch.is_empty() {
            Self::Empty
        } else {
            Self::Lines(batch.logs.concat())
        }
    }

    /// Text to put into the log view.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Lines(text) => text,
            Self::Empty => NO_LOGS_MESSAGE,
            Self::Unavailable => LOGS_FAILED_MESSAGE,
        }
    }

    /// Whether the viewport should snap to the newest line after rendering.
    #[must_use]
    pub fn follows_tail(&self) -> bool {
        matches!(self, Self::Lines(_))
    }
}
