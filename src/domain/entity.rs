//! Core domain models for the chat room.

use serde::{Deserialize, Serialize};

use super::value_object::{
    MessageId, MessageKind, MessageText, ParticipantName, Recipient, Timestamp,
};

/// Represents a participant currently present in the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Participant identifier (display name)
    pub name: ParticipantName,
    /// Timestamp of the last registration or heartbeat
    pub last_seen_at: Timestamp,
}

impl Participant {
    /// Create a new participant
    pub fn new(name: ParticipantName, last_seen_at: Timestamp) -> Self {
        Self { name, last_seen_at }
    }

    /// Refresh the liveness clock.
    ///
    /// `last_seen_at` never moves backwards, so a heartbeat that races an
    /// earlier one cannot shrink the staleness window.
    pub fn touch(&mut self, now: Timestamp) {
        if now > self.last_seen_at {
            self.last_seen_at = now;
        }
    }

    /// Whether this participant's last heartbeat is older than `cutoff`.
    pub fn is_stale(&self, cutoff: Timestamp) -> bool {
        self.last_seen_at < cutoff
    }
}

/// A message accepted for the log but not yet appended.
///
/// The store assigns `id` and `sent_at` at append time, turning a draft into
/// a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    /// Sender's participant name
    pub from: ParticipantName,
    /// Recipient (everyone or a single participant)
    pub to: Recipient,
    /// Message text
    pub text: MessageText,
    /// Message kind
    pub kind: MessageKind,
}

impl MessageDraft {
    /// Create a new message draft
    pub fn new(from: ParticipantName, to: Recipient, text: MessageText, kind: MessageKind) -> Self {
        Self {
            from,
            to,
            text,
            kind,
        }
    }

    /// Create a system status draft addressed to the whole room
    pub fn status(from: ParticipantName, text: MessageText) -> Self {
        Self {
            from,
            to: Recipient::Everyone,
            text,
            kind: MessageKind::Status,
        }
    }
}

/// Represents a message stored in the append-only log.
///
/// Messages are immutable once appended; there are no update or delete
/// operations anywhere in the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier, assigned at append time
    pub id: MessageId,
    /// Sender's participant name
    pub from: ParticipantName,
    /// Recipient (everyone or a single participant)
    pub to: Recipient,
    /// Message text
    pub text: MessageText,
    /// Message kind
    pub kind: MessageKind,
    /// Timestamp assigned at append time, non-decreasing with append order
    pub sent_at: Timestamp,
}

impl Message {
    /// Materialize a draft into a stored message
    pub fn from_draft(draft: MessageDraft, id: MessageId, sent_at: Timestamp) -> Self {
        Self {
            id,
            from: draft.from,
            to: draft.to,
            text: draft.text,
            kind: draft.kind,
            sent_at,
        }
    }
}
