//! Status poller — keeps the status badge and detail fields current.

use botwatch_domain::status::StatusIndicator;

use crate::client::DashboardClient;
use crate::ports::{BotApi, DashboardView, Runtime};

impl<A: BotApi, V: DashboardView, D, R> DashboardClient<A, V, D, R> {
    /// Fetch the status once and render the outcome.
    ///
    /// On failure only the badge changes (to [`StatusIndicator::Unknown`]);
    /// the detail fields keep whatever the last successful fetch wrote.
    #[tracing::instrument(skip(self))]
    pub async fn refresh_status(&self) {
        match self.inner.api.fetch_status().await {
            Ok(snapshot) => {
                tracing::debug!(is_running = snapshot.is_running, "bot status received");
                self.inner.view.set_indicator(snapshot.indicator());
                self.inner.view.set_details(&snapshot.details());
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching bot status");
                self.inner.view.set_indicator(StatusIndicator::Unknown);
            }
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
    /// Run [`refresh_status`](Self::refresh_status) in the background.
    pub(crate) fn spawn_status_refresh(&self) {
        let this = self.clone();
        self.inner
            .runtime
            .spawn(async move { this.refresh_status().await });
    }

    /// Repeating poll. Each tick spawns a fetch without waiting for the
    /// previous one, so slow responses may land after newer ones.
    pub(crate) async fn poll_status(self) {
        let interval = self.inner.config.status_interval();
        loop {
            self.inner.runtime.sleep(interval).await;
            self.spawn_status_refresh();
        }
    }
}
