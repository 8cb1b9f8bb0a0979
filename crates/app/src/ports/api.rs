//! Bot API port — the three backend endpoints the dashboard talks to.

use std::future::Future;
use std::rc::Rc;

use botwatch_domain::error::FetchError;
use botwatch_domain::logs::LogBatch;
use botwatch_domain::restart::RestartAck;
use botwatch_domain::status::StatusSnapshot;

/// Client for the bot backend's JSON API.
///
/// A response counts as successful as soon as its body decodes; the HTTP
/// status code is not part of the contract.
pub trait BotApi {
    /// `GET /api/status`.
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, FetchError>>;

    /// `GET /api/logs`.
    fn fetch_logs(&self) -> impl Future<Output = Result<LogBatch, FetchError>>;

    /// `POST /api/restart` with a JSON content type and an empty body.
    fn request_restart(&self) -> impl Future<Output = Result<RestartAck, FetchError>>;
}

impl<T: BotApi> BotApi for Rc<T> {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, FetchError>> {
        (**self).fetch_status()
    }

    fn fetch_logs(&self) -> impl Future<Output = Result<LogBatch, FetchError>> {
        (**self).fetch_logs()
    }

    fn request_restart(&self) -> impl Future<Output = Result<RestartAck, FetchError>> {
        (**self).request_restart()
    }
}
