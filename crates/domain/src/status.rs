//! Status snapshot — point-in-time health record of the bot.

use serde::{Deserialize, Serialize};

/// Payload of `GET /api/status`.
///
/// Every field is required; a missing or mistyped field makes the whole
/// response undecodable, which the dashboard treats as a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub is_running: bool,
    pub uptime: String,
    pub last_restart: String,
    pub restart_count: u64,
    pub bot_guilds: u64,
    pub server_time: String,
}

impl StatusSnapshot {
    /// Indicator state for this snapshot.
    #[must_use]
    pub fn indicator(&self) -> StatusIndicator {
        if self.is_running {
            StatusIndicator::Online
        } else {
            StatusIndicator::Offline
        }
    }

    /// Project the snapshot onto the five detail display fields.
    #[must_use]
    pub fn details(&self) -> StatusDetails {
        StatusDetails {
            uptime: self.uptime.clone(),
            last_restart: self.last_restart.clone(),
            restart_count: self.restart_count.to_string(),
            guild_count: self.bot_guilds.to_string(),
            server_time: self.server_time.clone(),
        }
    }
}

/// The three mutually exclusive states of the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusIndicator {
    Online,
    Offline,
    /// The last status fetch failed.
    Unknown,
}

impl StatusIndicator {
    /// Text shown inside the badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Unknown => "Unknown",
        }
    }

    /// CSS classes of the badge.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Online => "badge bg-success",
            Self::Offline => "badge bg-danger",
            Self::Unknown => "badge bg-warning",
        }
    }
}

impl std::fmt::Display for StatusIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Display text of the status detail fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDetails {
    pub uptime: String,
    pub last_restart: String,
    pub restart_count: String,
    pub guild_count: String,
    pub server_time: String,
}
