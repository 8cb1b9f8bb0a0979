//! Controls — the user-triggered buttons and their lock state.
//!
//! Each control follows `Idle → Pending → Idle`. While pending the button is
//! disabled and shows an in-progress label; leaving the pending phase always
//! restores the default enabled state.

use crate::error::ControlError;

/// A user-facing action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Restart the bot (asks for confirmation first).
    Restart,
    /// Re-fetch the log view outside the polling cadence.
    RefreshLogs,
}

impl Control {
    /// Label of the enabled button.
    #[must_use]
    pub const fn idle_label(self) -> &'static str {
        match self {
            Self::Restart => "Restart bot",
            Self::RefreshLogs => "Refresh",
        }
    }

    /// Label shown while the action is in progress.
    #[must_use]
    pub const fn pending_label(self) -> &'static str {
        match self {
            Self::Restart => "Restarting\u{2026}",
            Self::RefreshLogs => "Refreshing\u{2026}",
        }
    }
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Restart => f.write_str("restart"),
            Self::RefreshLogs => f.write_str("refresh logs"),
        }
    }
}

/// Rendered state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub disabled: bool,
    pub label: &'static str,
}

impl ButtonState {
    /// Enabled button with its default label.
    #[must_use]
    pub const fn idle(control: Control) -> Self {
        Self {
            disabled: false,
            label: control.idle_label(),
        }
    }

    /// Disabled button with its in-progress label.
    #[must_use]
    pub const fn pending(control: Control) -> Self {
        Self {
            disabled: true,
            label: control.pending_label(),
        }
    }
}

/// Phase of a control's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlPhase {
    #[default]
    Idle,
    Pending,
}

/// State machine of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    control: Control,
    phase: ControlPhase,
}

impl ControlState {
    /// A control in its initial, idle phase.
    #[must_use]
    pub const fn new(control: Control) -> Self {
        Self {
            control,
            phase: ControlPhase::Idle,
        }
    }

    #[must_use]
    pub const fn control(&self) -> Control {
        self.control
    }

    #[must_use]
    pub const fn phase(&self) -> ControlPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.phase, ControlPhase::Pending)
    }

    /// Button state matching the current phase.
    #[must_use]
    pub const fn button(&self) -> ButtonState {
        match self.phase {
            ControlPhase::Idle => ButtonState::idle(self.control),
            ControlPhase::Pending => ButtonState::pending(self.control),
        }
    }

    /// Move `Idle → Pending`.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::AlreadyPending`] when the control is locked.
    pub fn begin(&mut self) -> Result<ButtonState, ControlError> {
        if self.is_pending() {
            return Err(ControlError::AlreadyPending(self.control));
        }
        self.phase = ControlPhase::Pending;
        Ok(self.button())
    }

    /// Move back to `Idle`. Settling an idle control is a no-op.
    pub fn settle(&mut self) -> ButtonState {
        self.phase = ControlPhase::Idle;
        self.button()
    }
}
