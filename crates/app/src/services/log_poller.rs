//! Log poller — keeps the log view current.

use botwatch_domain::logs::LogDisplay;

use crate::client::DashboardClient;
use crate::ports::{BotApi, DashboardView, Runtime};

impl<A: BotApi, V: DashboardView, D, R> DashboardClient<A, V, D, R> {
    /// Fetch the logs once and replace the log view.
    ///
    /// Non-empty batches snap the viewport to the bottom, even when the
    /// user had scrolled up.
    #[tracing::instrument(skip(self))]
    pub async fn refresh_logs(&self) {
        let display = match self.inner.api.fetch_logs().await {
            Ok(batch) => {
                if let Some(reason) = &batch.error {
                    tracing::warn!(%reason, "backend could not read its logs");
                }
                tracing::debug!(lines = batch.logs.len(), "logs received");
                LogDisplay::from_batch(&batch)
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching logs");
                LogDisplay::Unavailable
            }
        };

        self.inner.view.set_log_text(display.text());
        if display.follows_tail() {
            self.inner.view.scroll_logs_to_bottom();
        }
    }
}

impl<A, V, D, R> DashboardClient<A, V, D, R>
where
    A: BotApi + 'static,
    V: DashboardView + 'static,
    D: 'static,
    R: Runtime + 'static,
{
    /// Run [`refresh_logs`](Self::refresh_logs) in the background.
    pub(crate) fn spawn_logs_refresh(&self) {
        let this = self.clone();
        self.inner
            .runtime
            .spawn(async move { this.refresh_logs().await });
    }

    /// Repeating poll; ticks never wait for the previous fetch.
    pub(crate) async fn poll_logs(self) {
        let interval = self.inner.config.logs_interval();
        loop {
            self.inner.runtime.sleep(interval).await;
            self.spawn_logs_refresh();
        }
    }
}
