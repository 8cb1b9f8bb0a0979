//! Acknowledgement returned by `POST /api/restart`.

use serde::{Deserialize, Serialize};

/// Opaque JSON body acknowledging a restart request.
///
/// The dashboard only logs it; a backend-side failure reported inside this
/// body is not told apart from success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestartAck(pub serde_json::Value);

impl std::fmt::Display for RestartAck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
