//! Server state shared across request handlers.

use serde::Deserialize;
use std::sync::Arc;

use crate::domain::{MessageStore, ParticipantRegistry};

/// Query parameters for the message fetch endpoint
#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<String>,
}

impl RecentQuery {
    /// Normalize the raw query value.
    ///
    /// Anything that is not a positive integer (absent, unparsable, zero)
    /// means "no limit", mirroring a `parseInt`-then-`isNaN` front end.
    pub fn limit(&self) -> Option<usize> {
        self.limit
            .as_deref()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|&limit| limit > 0)
    }
}

/// Shared application state: the registry/store pair owned explicitly and
/// passed into handlers, with no process-wide singletons.
pub struct AppState {
    /// Participant registry (abstraction over the storage layer)
    pub participants: Arc<dyn ParticipantRegistry>,
    /// Message log (abstraction over the storage layer)
    pub messages: Arc<dyn MessageStore>,
}
