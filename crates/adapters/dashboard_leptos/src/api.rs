//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use botwatch_app::ports::BotApi;
use botwatch_domain::error::FetchError;
use botwatch_domain::logs::LogBatch;
use botwatch_domain::restart::RestartAck;
use botwatch_domain::status::StatusSnapshot;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// [`BotApi`] backed by the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct GlooBotApi {
    status_url: String,
    logs_url: String,
    restart_url: String,
}

impl GlooBotApi {
    /// Build a client whose URLs come from `endpoint`, e.g.
    /// [`ClientConfig::endpoint`](botwatch_app::ClientConfig::endpoint).
    pub fn new(endpoint: impl Fn(&str) -> String) -> Self {
        Self {
            status_url: endpoint("/api/status"),
            logs_url: endpoint("/api/logs"),
            restart_url: endpoint("/api/restart"),
        }
    }
}

/// Map a `gloo-net` failure onto the domain taxonomy.
fn fetch_error(err: gloo_net::Error) -> FetchError {
    match err {
        gloo_net::Error::SerdeError(err) => FetchError::Decode(err.to_string()),
        other => FetchError::Transport(other.to_string()),
    }
}

/// Decode the JSON body whatever the status code; non-2xx is only logged.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, FetchError> {
    if !resp.ok() {
        tracing::warn!(
            url = %resp.url(),
            status = resp.status(),
            "non-success HTTP status, decoding body anyway"
        );
    }
    resp.json().await.map_err(fetch_error)
}

impl BotApi for GlooBotApi {
    async fn fetch_status(&self) -> Result<StatusSnapshot, FetchError> {
        let resp = Request::get(&self.status_url)
            .send()
            .await
            .map_err(fetch_error)?;
        decode(resp).await
    }

    async fn fetch_logs(&self) -> Result<LogBatch, FetchError> {
        let resp = Request::get(&self.logs_url)
            .send()
            .await
            .map_err(fetch_error)?;
        decode(resp).await
    }

    async fn request_restart(&self) -> Result<RestartAck, FetchError> {
        let resp = Request::post(&self.restart_url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(fetch_error)?;
        decode(resp).await
    }
}
