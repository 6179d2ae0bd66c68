//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 送信者の在室チェックとメッセージログへの追記
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：在室していない送信者のメッセージを拒否する
//! - 拒否されたメッセージが一切ログに追記されないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：在室中の参加者による chat / private_chat の送信
//! - 異常系：未入室の送信者、ストレージ障害

use std::sync::Arc;

use crate::common::time::get_brt_timestamp;
use crate::domain::{
    Message, MessageDraft, MessageKind, MessageStore, MessageText, ParticipantName,
    ParticipantRegistry, Recipient, Timestamp,
};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// ParticipantRegistry（データアクセス層の抽象化）
    participants: Arc<dyn ParticipantRegistry>,
    /// MessageStore（データアクセス層の抽象化）
    messages: Arc<dyn MessageStore>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(participants: Arc<dyn ParticipantRegistry>, messages: Arc<dyn MessageStore>) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `from` - 送信者の参加者名（Domain Model）
    /// * `to` - 宛先（everyone または特定の参加者）
    /// * `text` - メッセージ本文
    /// * `kind` - メッセージ種別（chat / private_chat）
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - 追記されたメッセージ
    /// * `Err(SendMessageError)` - 送信失敗
    pub async fn execute(
        &self,
        from: ParticipantName,
        to: Recipient,
        text: MessageText,
        kind: MessageKind,
    ) -> Result<Message, SendMessageError> {
        // 1. 送信者の在室チェック（状態変更の前に認可する）
        let present = self
            .participants
            .contains(&from)
            .await
            .map_err(SendMessageError::Storage)?;
        if !present {
            return Err(SendMessageError::SenderNotPresent(from.into_string()));
        }

        // 2. ログへ追記（sent_at はストアが採番する）
        let draft = MessageDraft::new(from, to, text, kind);
        let now = Timestamp::new(get_brt_timestamp());
        self.messages
            .append(draft, now)
            .await
            .map_err(SendMessageError::Storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Participant, RepositoryError};
    use crate::infrastructure::repository::{InMemoryMessageStore, InMemoryParticipantRegistry};

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    fn text(value: &str) -> MessageText {
        MessageText::new(value.to_string()).unwrap()
    }

    async fn registry_with(names: &[&str]) -> Arc<InMemoryParticipantRegistry> {
        let registry = Arc::new(InMemoryParticipantRegistry::new());
        for n in names {
            registry
                .register(Participant::new(name(n), Timestamp::new(1000)))
                .await
                .unwrap();
        }
        registry
    }

    #[tokio::test]
    async fn test_send_message_success() {
        // テスト項目: 在室中の参加者がメッセージを送信できる
        // given (前提条件):
        let registry = registry_with(&["Maria"]).await;
        let store = Arc::new(InMemoryMessageStore::new());
        let usecase = SendMessageUseCase::new(registry, store.clone());

        // when (操作):
        let result = usecase
            .execute(
                name("Maria"),
                Recipient::Everyone,
                text("oi galera!"),
                MessageKind::Chat,
            )
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
        let message = result.unwrap();
        assert_eq!(message.from, name("Maria"));
        assert_eq!(message.kind, MessageKind::Chat);

        let log = store.recent(None).await.unwrap();
        assert_eq!(log.len(), 1);
    }

    #[tokio::test]
    async fn test_send_private_chat_success() {
        // テスト項目: 特定の参加者宛の private_chat を送信できる
        // given (前提条件): 宛先は registry で検証されない（書き込み時検証は非目標）
        let registry = registry_with(&["Maria"]).await;
        let store = Arc::new(InMemoryMessageStore::new());
        let usecase = SendMessageUseCase::new(registry, store.clone());

        // when (操作): 未入室の João 宛に送信する
        let result = usecase
            .execute(
                name("Maria"),
                Recipient::Name(name("João")),
                text("segredo"),
                MessageKind::PrivateChat,
            )
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().kind, MessageKind::PrivateChat);
    }

    #[tokio::test]
    async fn test_send_message_sender_not_present_fails() {
        // テスト項目: 未入室の送信者のメッセージは拒否され、ログに残らない
        // given (前提条件):
        let registry = registry_with(&[]).await;
        let store = Arc::new(InMemoryMessageStore::new());
        let usecase = SendMessageUseCase::new(registry, store.clone());

        // when (操作):
        let result = usecase
            .execute(
                name("João"),
                Recipient::Everyone,
                text("oi"),
                MessageKind::Chat,
            )
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(SendMessageError::SenderNotPresent("João".to_string()))
        );
        assert!(store.recent(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_message_storage_failure_propagates() {
        // テスト項目: 追記時のストレージ障害は Storage エラーとして伝播する
        // given (前提条件):
        use crate::domain::repository::{MockMessageStore, MockParticipantRegistry};

        let mut registry = MockParticipantRegistry::new();
        registry.expect_contains().returning(|_| Ok(true));

        let mut store = MockMessageStore::new();
        store
            .expect_append()
            .returning(|_, _| Err(RepositoryError::Unavailable("timeout".to_string())));

        let usecase = SendMessageUseCase::new(Arc::new(registry), Arc::new(store));

        // when (操作):
        let result = usecase
            .execute(
                name("Maria"),
                Recipient::Everyone,
                text("oi"),
                MessageKind::Chat,
            )
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(SendMessageError::Storage(RepositoryError::Unavailable(
                "timeout".to_string()
            )))
        );
    }
}
