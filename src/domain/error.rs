//! Domain layer error definitions.

use thiserror::Error;

/// Errors raised by structural validation of inbound values.
///
/// Every variant names the offending field, so the transport layer can report
/// what was malformed without inspecting the payload again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Participant name validation error
    #[error("participant name cannot be empty")]
    NameEmpty,

    /// Participant name too long error
    #[error("participant name cannot exceed {max} characters (got {actual})")]
    NameTooLong { max: usize, actual: usize },

    /// Recipient validation error
    #[error("message recipient cannot be empty")]
    RecipientEmpty,

    /// Message text validation error
    #[error("message text cannot be empty")]
    TextEmpty,

    /// Message text too long error
    #[error("message text cannot exceed {max} characters (got {actual})")]
    TextTooLong { max: usize, actual: usize },

    /// Message kind validation error (only `chat` and `private_chat` may be
    /// submitted by a caller)
    #[error("unknown message kind '{0}'")]
    UnknownKind(String),
}
