//! Dashboard client — the single context object shared by every handler.
//!
//! The client is a cheap `Rc` handle: clone it into timer callbacks and
//! button handlers instead of reaching for globals. Behaviour is split across
//! the [`services`](crate::services) modules, each adding an `impl` block.

use std::cell::Cell;
use std::rc::Rc;

use botwatch_domain::control::{Control, ControlState};
use botwatch_domain::error::ControlError;

use crate::config::ClientConfig;
use crate::ports::{BotApi, DashboardView, Dialogs, Runtime};

/// Handle to the running dashboard.
pub struct DashboardClient<A, V, D, R> {
    pub(crate) inner: Rc<Context<A, V, D, R>>,
}

/// State shared by all clones of a [`DashboardClient`].
pub(crate) struct Context<A, V, D, R> {
    pub(crate) api: A,
    pub(crate) view: V,
    pub(crate) dialogs: D,
    pub(crate) runtime: R,
    pub(crate) config: ClientConfig,
    restart: Cell<ControlState>,
    refresh_logs: Cell<ControlState>,
}

impl<A, V, D, R> Clone for DashboardClient<A, V, D, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A, V, D, R> DashboardClient<A, V, D, R> {
    /// Wire the ports together. Nothing is fetched until [`start`](Self::start).
    pub fn new(api: A, view: V, dialogs: D, runtime: R, config: ClientConfig) -> Self {
        Self {
            inner: Rc::new(Context {
                api,
                view,
                dialogs,
                runtime,
                config,
                restart: Cell::new(ControlState::new(Control::Restart)),
                refresh_logs: Cell::new(ControlState::new(Control::RefreshLogs)),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Current state machine of `control`.
    #[must_use]
    pub fn control_state(&self, control: Control) -> ControlState {
        self.control_cell(control).get()
    }

    fn control_cell(&self, control: Control) -> &Cell<ControlState> {
        match control {
            Control::Restart => &self.inner.restart,
            Control::RefreshLogs => &self.inner.refresh_logs,
        }
    }
}

impl<A, V: DashboardView, D, R> DashboardClient<A, V, D, R> {
    /// Lock `control` and render it as pending.
    pub(crate) fn begin(&self, control: Control) -> Result<(), ControlError> {
        let cell = self.control_cell(control);
        let mut state = cell.get();
        let button = state.begin()?;
        cell.set(state);
        self.inner.view.set_button(control, button);
        Ok(())
    }

    /// Unlock `control` and restore its default button.
    pub(crate) fn settle(&self, control: Control) {
        let cell = self.control_cell(control);
        let mut state = cell.get();
        let button = state.settle();
        cell.set(state);
        self.inner.view.set_button(control, button);
    }
}

impl<A, V, D, R> DashboardClient<A, V, D, R>
where
    A: BotApi + 'static,
    V: DashboardView + 'static,
    D: Dialogs + 'static,
    R: Runtime + 'static,
{
    /// Fetch status and logs once, then arm both repeating polls.
    ///
    /// Call once per page; the polls run for the lifetime of the runtime.
    pub fn start(&self) {
        tracing::info!(
            status_interval_ms = self.inner.config.polling.status_interval_ms,
            logs_interval_ms = self.inner.config.polling.logs_interval_ms,
            "starting dashboard"
        );
        self.spawn_status_refresh();
        self.spawn_logs_refresh();
        self.inner.runtime.spawn(self.clone().poll_status());
        self.inner.runtime.spawn(self.clone().poll_logs());
    }
}
