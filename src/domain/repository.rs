//! Storage abstractions owned by the domain layer.
//!
//! The domain defines what it needs from persistence; the infrastructure
//! layer provides implementations (dependency inversion). The core only
//! requires a keyed collection with atomic conditional insert per participant
//! name and an append-only ordered collection with bounded suffix retrieval.

use async_trait::async_trait;
use thiserror::Error;

use super::{
    entity::{Message, MessageDraft, Participant},
    value_object::{ParticipantName, Timestamp},
};

/// Errors raised by the storage layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A participant with the same name is already present
    #[error("participant name '{0}' is already taken")]
    NameTaken(String),

    /// The named participant is not currently present
    #[error("participant '{0}' is not registered")]
    ParticipantNotFound(String),

    /// The backing store failed; distinct from not-found so callers can retry
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Registry of currently-present participants.
///
/// Name uniqueness is the registry's invariant: at any instant a name is
/// present at most once, even under concurrent registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantRegistry: Send + Sync {
    /// Atomically check-and-insert a participant.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NameTaken` if the name is already present.
    /// Of two concurrent registrations with the same name, exactly one
    /// succeeds.
    async fn register(&self, participant: Participant) -> Result<(), RepositoryError>;

    /// Refresh a participant's liveness clock.
    ///
    /// Does not resurrect a participant that has already left or expired.
    async fn touch(&self, name: &ParticipantName, now: Timestamp) -> Result<(), RepositoryError>;

    /// Whether the named participant is currently present.
    async fn contains(&self, name: &ParticipantName) -> Result<bool, RepositoryError>;

    /// Snapshot of current membership, stable within the call.
    async fn list(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// Remove a participant explicitly, returning the removed entry.
    async fn remove(&self, name: &ParticipantName) -> Result<Participant, RepositoryError>;

    /// Remove every participant whose `last_seen_at` is older than `cutoff`
    /// and return exactly those removed.
    ///
    /// Staleness must be evaluated at removal time: a participant touched
    /// after the caller computed `cutoff` but before removal must survive.
    async fn remove_stale(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError>;
}

/// Append-only ordered log of messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Append a draft, assigning its id and `sent_at`.
    ///
    /// `sent_at` is non-decreasing with append order, so timestamp order and
    /// log order always agree.
    async fn append(&self, draft: MessageDraft, now: Timestamp)
    -> Result<Message, RepositoryError>;

    /// Retrieve messages in append order.
    ///
    /// `None` returns the whole log; `Some(k)` returns the LAST `k` messages,
    /// oldest of the selected window first.
    async fn recent(&self, limit: Option<usize>) -> Result<Vec<Message>, RepositoryError>;
}
