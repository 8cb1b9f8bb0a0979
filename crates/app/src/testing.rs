//! In-memory port implementations shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use botwatch_domain::control::{ButtonState, Control};
use botwatch_domain::error::FetchError;
use botwatch_domain::logs::LogBatch;
use botwatch_domain::restart::RestartAck;
use botwatch_domain::status::{StatusDetails, StatusIndicator, StatusSnapshot};

use crate::client::DashboardClient;
use crate::config::ClientConfig;
use crate::ports::{BotApi, DashboardView, Dialogs, Runtime};

pub(crate) fn snapshot(is_running: bool) -> StatusSnapshot {
    StatusSnapshot {
        is_running,
        uptime: "0d 1h 2m 3s".to_string(),
        last_restart: "Never restarted".to_string(),
        restart_count: 0,
        bot_guilds: 3,
        server_time: "2024-05-01 12:00:00".to_string(),
    }
}

pub(crate) type TestClient = DashboardClient<FakeApi, FakeView, FakeDialogs, TokioRuntime>;

pub(crate) fn client(api: &FakeApi, view: &FakeView, dialogs: &FakeDialogs) -> TestClient {
    DashboardClient::new(
        api.clone(),
        view.clone(),
        dialogs.clone(),
        TokioRuntime,
        ClientConfig::default(),
    )
}

/// Run `fut` on a `LocalSet` so `spawn_local` works.
pub(crate) async fn run_local<F: Future>(fut: F) -> F::Output {
    tokio::task::LocalSet::new().run_until(fut).await
}

/// Let the (paused) clock move forward by `ms`.
pub(crate) async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

// ── Runtime ────────────────────────────────────────────────────

pub(crate) struct TokioRuntime;

impl Runtime for TokioRuntime {
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        tokio::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

// ── Bot API ────────────────────────────────────────────────────

/// Scripted responses for one endpoint: queued `(latency, result)` pairs
/// first, then the fallback forever.
struct Script<T> {
    queue: RefCell<VecDeque<(Duration, Result<T, FetchError>)>>,
    fallback: RefCell<Result<T, FetchError>>,
    calls: Cell<usize>,
}

impl<T: Clone> Script<T> {
    fn new(fallback: T) -> Self {
        Self {
            queue: RefCell::new(VecDeque::new()),
            fallback: RefCell::new(Ok(fallback)),
            calls: Cell::new(0),
        }
    }

    async fn call(&self) -> Result<T, FetchError> {
        self.calls.set(self.calls.get() + 1);
        let next = self.queue.borrow_mut().pop_front();
        let (latency, result) =
            next.unwrap_or_else(|| (Duration::ZERO, self.fallback.borrow().clone()));
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        result
    }
}

struct FakeApiState {
    status: Script<StatusSnapshot>,
    logs: Script<LogBatch>,
    restart: Script<RestartAck>,
}

#[derive(Clone)]
pub(crate) struct FakeApi {
    state: Rc<FakeApiState>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            state: Rc::new(FakeApiState {
                status: Script::new(snapshot(true)),
                logs: Script::new(LogBatch::new(vec!["bot ready\n".to_string()])),
                restart: Script::new(RestartAck(
                    serde_json::json!({"status": "restarting"}),
                )),
            }),
        }
    }
}

impl FakeApi {
    pub(crate) fn respond_status(&self, snapshot: StatusSnapshot) {
        *self.state.status.fallback.borrow_mut() = Ok(snapshot);
    }

    pub(crate) fn fail_status(&self, message: &str) {
        *self.state.status.fallback.borrow_mut() = Err(FetchError::Transport(message.to_string()));
    }

    pub(crate) fn fail_decode(&self, message: &str) {
        *self.state.status.fallback.borrow_mut() = Err(FetchError::Decode(message.to_string()));
    }

    pub(crate) fn queue_status(
        &self,
        latency: Duration,
        result: Result<StatusSnapshot, FetchError>,
    ) {
        self.state
            .status
            .queue
            .borrow_mut()
            .push_back((latency, result));
    }

    pub(crate) fn respond_logs(&self, batch: LogBatch) {
        *self.state.logs.fallback.borrow_mut() = Ok(batch);
    }

    pub(crate) fn fail_logs(&self, message: &str) {
        *self.state.logs.fallback.borrow_mut() = Err(FetchError::Transport(message.to_string()));
    }

    pub(crate) fn queue_logs(&self, latency: Duration, result: Result<LogBatch, FetchError>) {
        self.state
            .logs
            .queue
            .borrow_mut()
            .push_back((latency, result));
    }

    pub(crate) fn respond_restart(&self, body: serde_json::Value) {
        *self.state.restart.fallback.borrow_mut() = Ok(RestartAck(body));
    }

    pub(crate) fn fail_restart(&self, message: &str) {
        *self.state.restart.fallback.borrow_mut() =
            Err(FetchError::Transport(message.to_string()));
    }

    /// Delay the next restart response by `latency`.
    pub(crate) fn queue_restart(&self, latency: Duration) {
        let result = self.state.restart.fallback.borrow().clone();
        self.state
            .restart
            .queue
            .borrow_mut()
            .push_back((latency, result));
    }

    pub(crate) fn status_calls(&self) -> usize {
        self.state.status.calls.get()
    }

    pub(crate) fn logs_calls(&self) -> usize {
        self.state.logs.calls.get()
    }

    pub(crate) fn restart_calls(&self) -> usize {
        self.state.restart.calls.get()
    }
}

impl BotApi for FakeApi {
    async fn fetch_status(&self) -> Result<StatusSnapshot, FetchError> {
        self.state.status.call().await
    }

    async fn fetch_logs(&self) -> Result<LogBatch, FetchError> {
        self.state.logs.call().await
    }

    async fn request_restart(&self) -> Result<RestartAck, FetchError> {
        self.state.restart.call().await
    }
}

// ── View ───────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct ViewState {
    indicator: Option<StatusIndicator>,
    details: Option<StatusDetails>,
    log_text: String,
    log_writes: usize,
    scroll_offset: usize,
    buttons: HashMap<Control, ButtonState>,
}

/// Records what the dashboard rendered. The log viewport's scroll range is
/// modelled as the byte length of its text.
#[derive(Clone, Default)]
pub(crate) struct FakeView {
    state: Rc<RefCell<ViewState>>,
}

impl FakeView {
    pub(crate) fn indicator(&self) -> Option<StatusIndicator> {
        self.state.borrow().indicator
    }

    pub(crate) fn details(&self) -> Option<StatusDetails> {
        self.state.borrow().details.clone()
    }

    pub(crate) fn log_text(&self) -> String {
        self.state.borrow().log_text.clone()
    }

    pub(crate) fn log_writes(&self) -> usize {
        self.state.borrow().log_writes
    }

    pub(crate) fn scroll_offset(&self) -> usize {
        self.state.borrow().scroll_offset
    }

    pub(crate) fn max_scroll(&self) -> usize {
        self.state.borrow().log_text.len()
    }

    /// Simulate the user scrolling the viewport.
    pub(crate) fn scroll_to(&self, offset: usize) {
        let mut state = self.state.borrow_mut();
        state.scroll_offset = offset.min(state.log_text.len());
    }

    /// Rendered button, defaulting to the idle state of a fresh page.
    pub(crate) fn button(&self, control: Control) -> ButtonState {
        self.state
            .borrow()
            .buttons
            .get(&control)
            .copied()
            .unwrap_or(ButtonState::idle(control))
    }
}

impl DashboardView for FakeView {
    fn set_indicator(&self, indicator: StatusIndicator) {
        self.state.borrow_mut().indicator = Some(indicator);
    }

    fn set_details(&self, details: &StatusDetails) {
        self.state.borrow_mut().details = Some(details.clone());
    }

    fn set_log_text(&self, text: &str) {
        let mut state = self.state.borrow_mut();
        state.log_text = text.to_string();
        state.log_writes += 1;
        state.scroll_offset = state.scroll_offset.min(text.len());
    }

    fn scroll_logs_to_bottom(&self) {
        let mut state = self.state.borrow_mut();
        state.scroll_offset = state.log_text.len();
    }

    fn set_button(&self, control: Control, state: ButtonState) {
        self.state.borrow_mut().buttons.insert(control, state);
    }
}

// ── Dialogs ────────────────────────────────────────────────────

#[derive(Clone)]
pub(crate) struct FakeDialogs {
    accept: Rc<Cell<bool>>,
    prompts: Rc<RefCell<Vec<String>>>,
    alerts: Rc<RefCell<Vec<String>>>,
}

impl Default for FakeDialogs {
    fn default() -> Self {
        Self {
            accept: Rc::new(Cell::new(true)),
            prompts: Rc::default(),
            alerts: Rc::default(),
        }
    }
}

impl FakeDialogs {
    pub(crate) fn declining() -> Self {
        let dialogs = Self::default();
        dialogs.accept.set(false);
        dialogs
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub(crate) fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialogs for FakeDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.accept.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
