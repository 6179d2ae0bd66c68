//! HTTP API request/response DTOs for the chat room server.
//!
//! Request DTOs carry raw strings off the wire; their `parse()` methods are
//! the structural validation gate. Nothing reaches the registry or the store
//! before parsing succeeds, so a rejected payload is never partially applied.

use serde::{Deserialize, Serialize};

use crate::common::time::timestamp_to_brt_rfc3339;
use crate::domain::{
    Message, MessageKind, MessageText, Participant, ParticipantName, Recipient, ValidationError,
};

/// Join request body
#[derive(Debug, Clone, Deserialize)]
pub struct JoinRequest {
    pub name: String,
}

impl JoinRequest {
    /// Validate the payload into a domain participant name.
    pub fn parse(self) -> Result<ParticipantName, ValidationError> {
        ParticipantName::new(self.name)
    }
}

/// Send-message request body
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub to: String,
    pub text: String,
    pub kind: String,
}

/// Validated send-message payload (sender comes from the `User` header)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessagePayload {
    pub to: Recipient,
    pub text: MessageText,
    pub kind: MessageKind,
}

impl SendMessageRequest {
    /// Validate the payload into domain values.
    ///
    /// The kind travels as a raw string and is matched explicitly, so a
    /// caller can never smuggle in the reserved `status` kind.
    pub fn parse(self) -> Result<SendMessagePayload, ValidationError> {
        let to = Recipient::parse(self.to)?;
        let text = MessageText::new(self.text)?;
        let kind = MessageKind::from_client_kind(&self.kind)?;
        Ok(SendMessagePayload { to, text, kind })
    }
}

/// Participant representation for list/join responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDto {
    pub name: String,
    pub last_seen_at: String, // ISO 8601
}

impl ParticipantDto {
    pub fn from_domain(participant: &Participant) -> Self {
        Self {
            name: participant.name.as_str().to_string(),
            last_seen_at: timestamp_to_brt_rfc3339(participant.last_seen_at.value()),
        }
    }
}

/// Message representation for fetch/send responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    pub kind: String,
    pub sent_at: String, // ISO 8601
}

impl MessageDto {
    pub fn from_domain(message: &Message) -> Self {
        Self {
            id: message.id.as_str().to_string(),
            from: message.from.as_str().to_string(),
            to: message.to.as_str().to_string(),
            text: message.text.as_str().to_string(),
            kind: message.kind.as_str().to_string(),
            sent_at: timestamp_to_brt_rfc3339(message.sent_at.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_request_parse_success() {
        // テスト項目: 有効な join ペイロードを解釈できる
        // given (前提条件):
        let request = JoinRequest {
            name: "Maria".to_string(),
        };

        // when (操作):
        let result = request.parse();

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "Maria");
    }

    #[test]
    fn test_join_request_parse_empty_name_fails() {
        // テスト項目: 空の名前は拒否される
        // given (前提条件):
        let request = JoinRequest {
            name: "".to_string(),
        };

        // when (操作):
        let result = request.parse();

        // then (期待する結果):
        assert_eq!(result, Err(ValidationError::NameEmpty));
    }

    #[test]
    fn test_send_message_request_parse_success() {
        // テスト項目: 有効なメッセージペイロードを解釈できる
        // given (前提条件):
        let request = SendMessageRequest {
            to: "everyone".to_string(),
            text: "oi galera!".to_string(),
            kind: "chat".to_string(),
        };

        // when (操作):
        let result = request.parse().unwrap();

        // then (期待する結果):
        assert_eq!(result.to, Recipient::Everyone);
        assert_eq!(result.text.as_str(), "oi galera!");
        assert_eq!(result.kind, MessageKind::Chat);
    }

    #[test]
    fn test_send_message_request_parse_rejects_status_kind() {
        // テスト項目: status 種別のメッセージは送信できない
        // given (前提条件):
        let request = SendMessageRequest {
            to: "everyone".to_string(),
            text: "fake announcement".to_string(),
            kind: "status".to_string(),
        };

        // when (操作):
        let result = request.parse();

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ValidationError::UnknownKind("status".to_string()))
        );
    }

    #[test]
    fn test_send_message_request_parse_empty_fields_fail() {
        // テスト項目: 空のフィールドはそれぞれのエラーで拒否される
        // given / when / then:
        let empty_to = SendMessageRequest {
            to: "".to_string(),
            text: "oi".to_string(),
            kind: "chat".to_string(),
        };
        assert_eq!(empty_to.parse(), Err(ValidationError::RecipientEmpty));

        let empty_text = SendMessageRequest {
            to: "everyone".to_string(),
            text: "".to_string(),
            kind: "chat".to_string(),
        };
        assert_eq!(empty_text.parse(), Err(ValidationError::TextEmpty));

        let empty_kind = SendMessageRequest {
            to: "everyone".to_string(),
            text: "oi".to_string(),
            kind: "".to_string(),
        };
        assert_eq!(
            empty_kind.parse(),
            Err(ValidationError::UnknownKind("".to_string()))
        );
    }
}
