//! Action controller — restart and manual log refresh buttons.
//!
//! Both follow the same guard: lock the button and show an in-progress
//! label, run the request, then unlock after a fixed delay. The synchronous
//! part runs inside the click handler so the button is disabled before the
//! next repaint.

use botwatch_domain::control::Control;

use crate::client::DashboardClient;
use crate::ports::{BotApi, DashboardView, Dialogs, Runtime};

/// Confirmation asked before restarting the bot.
pub const RESTART_PROMPT: &str = "Are you sure you want to restart the bot?";

/// Alert shown when the restart request fails.
pub const RESTART_FAILED_MESSAGE: &str =
    "Failed to restart the bot. See the console log for details.";

impl<A, V, D, R> DashboardClient<A, V, D, R>
where
    A: BotApi + 'static,
    V: DashboardView + 'static,
    D: Dialogs + 'static,
    R: Runtime + 'static,
{
    /// Click handler of the restart button.
    ///
    /// Asks for confirmation; declining leaves everything untouched.
    pub fn on_restart_click(&self) {
        if self.control_state(Control::Restart).is_pending() {
            tracing::debug!("restart already in progress, ignoring click");
            return;
        }
        if !self.inner.dialogs.confirm(RESTART_PROMPT) {
            tracing::debug!("restart declined");
            return;
        }
        if let Err(err) = self.begin(Control::Restart) {
            tracing::debug!(error = %err, "restart not started");
            return;
        }

        let this = self.clone();
        self.inner
            .runtime
            .spawn(async move { this.complete_restart().await });
    }

    /// Send the restart request and unlock the button.
    ///
    /// A resolved request unlocks after the settle delay and then forces one
    /// status and one log fetch. A failed request unlocks at once and alerts.
    async fn complete_restart(&self) {
        match self.inner.api.request_restart().await {
            Ok(ack) => {
                tracing::info!(response = %ack, "bot restart requested");
                self.inner
                    .runtime
                    .sleep(self.inner.config.restart_settle())
                    .await;
                self.settle(Control::Restart);
                self.spawn_status_refresh();
                self.spawn_logs_refresh();
            }
            Err(err) => {
                tracing::error!(error = %err, "error restarting bot");
                self.settle(Control::Restart);
                self.inner.dialogs.alert(RESTART_FAILED_MESSAGE);
            }
        }
    }

    /// Click handler of the refresh-logs button.
    ///
    /// The log view updates as soon as the fetch resolves; the button stays
    /// locked for the cooldown counted from the click, whatever the latency.
    pub fn on_refresh_click(&self) {
        if let Err(err) = self.begin(Control::RefreshLogs) {
            tracing::debug!(error = %err, "ignoring refresh click");
            return;
        }
        self.spawn_logs_refresh();

        let this = self.clone();
        self.inner.runtime.spawn(async move {
            this.inner
                .runtime
                .sleep(this.inner.config.refresh_cooldown())
                .await;
            this.settle(Control::RefreshLogs);
        });
    }
}
