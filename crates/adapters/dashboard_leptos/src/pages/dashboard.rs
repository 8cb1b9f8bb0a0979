use botwatch_app::{ClientConfig, DashboardClient};
use leptos::prelude::*;

use crate::api::GlooBotApi;
use crate::components::{ActionButton, LogPanel, StatCard, StatusBadge};
use crate::runtime::{BrowserDialogs, BrowserRuntime};
use crate::view::{SignalView, ids};

/// The status dashboard: badge, detail cards, log viewport and the two
/// action buttons.
///
/// Builds the [`DashboardClient`] once and starts its polls; the client is
/// kept in local storage because it is not `Send`.
#[component]
pub fn Dashboard(config: ClientConfig) -> impl IntoView {
    let display = SignalView::new();
    let api = GlooBotApi::new(|path| config.endpoint(path));
    let client = DashboardClient::new(api, display, BrowserDialogs, BrowserRuntime, config);
    client.start();
    let client = StoredValue::new_local(client);

    let on_restart = move || client.with_value(DashboardClient::on_restart_click);
    let on_refresh = move || client.with_value(DashboardClient::on_refresh_click);

    view! {
        <div class="dashboard">
            <section class="status-panel">
                <header class="panel-header">
                    <h1>"Bot status"</h1>
                    <StatusBadge indicator=display.indicator/>
                </header>
                <div class="stat-grid">
                    <StatCard label="Uptime" id=ids::UPTIME value=display.detail(|d| &d.uptime)/>
                    <StatCard
                        label="Last restart"
                        id=ids::LAST_RESTART
                        value=display.detail(|d| &d.last_restart)
                    />
                    <StatCard
                        label="Restarts"
                        id=ids::RESTART_COUNT
                        value=display.detail(|d| &d.restart_count)
                    />
                    <StatCard label="Guilds" id=ids::GUILD_COUNT value=display.detail(|d| &d.guild_count)/>
                    <StatCard
                        label="Server time"
                        id=ids::SERVER_TIME
                        value=display.detail(|d| &d.server_time)
                    />
                </div>
                <ActionButton
                    id=ids::RESTART_BUTTON
                    class="btn btn-danger"
                    state=display.restart_button
                    on_click=on_restart
                />
            </section>

            <section class="log-panel">
                <header class="panel-header">
                    <h2>"Recent logs"</h2>
                    <ActionButton
                        id=ids::REFRESH_LOGS_BUTTON
                        state=display.refresh_button
                        on_click=on_refresh
                    />
                </header>
                <LogPanel text=display.log_text viewport=display.log_viewport/>
            </section>
        </div>
    }
}
