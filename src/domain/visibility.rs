//! Visibility policy for stored messages.
//!
//! A stateless predicate invoked by the read path for every stored message
//! against the identity of the requester. Keeping this out of the message
//! store keeps storage and access control orthogonal.

use super::{
    entity::Message,
    value_object::{MessageKind, ParticipantName, Recipient},
};

/// Whether `requester` may see `message`.
///
/// Public chat and system status messages are visible to every requester;
/// a private chat is visible only to its sender and its addressee. The kind,
/// not the recipient, decides visibility: a `chat` addressed to a specific
/// name stays public.
pub fn visible_to(message: &Message, requester: &ParticipantName) -> bool {
    match message.kind {
        MessageKind::Chat | MessageKind::Status => true,
        MessageKind::PrivateChat => {
            message.from == *requester
                || matches!(&message.to, Recipient::Name(to) if to == requester)
        }
    }
}
