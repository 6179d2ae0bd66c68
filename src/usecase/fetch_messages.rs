//! UseCase: メッセージ取得処理
//!
//! ログの末尾ウィンドウを取得し、リクエスタの視点で可視性フィルタを適用します。
//! limit はストレージ上のウィンドウに対して適用され、その後にフィルタされます。

use std::sync::Arc;

use crate::domain::{Message, MessageStore, ParticipantName, visible_to};

use super::error::FetchMessagesError;

/// メッセージ取得のユースケース
pub struct FetchMessagesUseCase {
    /// MessageStore（データアクセス層の抽象化）
    messages: Arc<dyn MessageStore>,
}

impl FetchMessagesUseCase {
    /// 新しい FetchMessagesUseCase を作成
    pub fn new(messages: Arc<dyn MessageStore>) -> Self {
        Self { messages }
    }

    /// メッセージ取得を実行
    ///
    /// # Arguments
    ///
    /// * `requester` - リクエスタの参加者名（可視性判定に使用）
    /// * `limit` - 取得件数の上限（末尾 limit 件。None は全件）
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Message>)` - リクエスタに見えるメッセージ（追記順）
    /// * `Err(FetchMessagesError)` - 取得失敗
    pub async fn execute(
        &self,
        requester: ParticipantName,
        limit: Option<usize>,
    ) -> Result<Vec<Message>, FetchMessagesError> {
        let window = self
            .messages
            .recent(limit)
            .await
            .map_err(FetchMessagesError::Storage)?;

        Ok(window
            .into_iter()
            .filter(|message| visible_to(message, &requester))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        MessageDraft, MessageKind, MessageText, Recipient, Timestamp,
    };
    use crate::infrastructure::repository::InMemoryMessageStore;

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    async fn store_with_fixture() -> Arc<InMemoryMessageStore> {
        // ログ: 公開 chat、Maria→João の private_chat、status の 3 件
        let store = Arc::new(InMemoryMessageStore::new());
        let drafts = vec![
            MessageDraft::new(
                name("Maria"),
                Recipient::Everyone,
                MessageText::new("oi galera!".to_string()).unwrap(),
                MessageKind::Chat,
            ),
            MessageDraft::new(
                name("Maria"),
                Recipient::Name(name("João")),
                MessageText::new("segredo".to_string()).unwrap(),
                MessageKind::PrivateChat,
            ),
            MessageDraft::status(
                name("Pedro"),
                MessageText::new("entra na sala...".to_string()).unwrap(),
            ),
        ];
        for (i, draft) in drafts.into_iter().enumerate() {
            store
                .append(draft, Timestamp::new(1000 + i as i64))
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_fetch_filters_private_messages_for_third_party() {
        // テスト項目: 第三者には private_chat が見えない
        // given (前提条件):
        let store = store_with_fixture().await;
        let usecase = FetchMessagesUseCase::new(store);

        // when (操作): Pedro として取得する
        let visible = usecase.execute(name("Pedro"), None).await.unwrap();

        // then (期待する結果): chat と status の 2 件のみ
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|m| m.kind != MessageKind::PrivateChat));
    }

    #[tokio::test]
    async fn test_fetch_shows_private_messages_to_sender_and_addressee() {
        // テスト項目: private_chat は送信者と宛先の両方に見える
        // given (前提条件):
        let store = store_with_fixture().await;
        let usecase = FetchMessagesUseCase::new(store);

        // when (操作):
        let for_sender = usecase.execute(name("Maria"), None).await.unwrap();
        let for_addressee = usecase.execute(name("João"), None).await.unwrap();

        // then (期待する結果): 3 件すべて見える
        assert_eq!(for_sender.len(), 3);
        assert_eq!(for_addressee.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_applies_limit_before_filtering() {
        // テスト項目: limit はログ末尾のウィンドウに適用され、その後フィルタされる
        // given (前提条件): 末尾 2 件は private_chat と status
        let store = store_with_fixture().await;
        let usecase = FetchMessagesUseCase::new(store);

        // when (操作): Pedro として末尾 2 件を取得する
        let visible = usecase.execute(name("Pedro"), Some(2)).await.unwrap();

        // then (期待する結果): private_chat がフィルタされ status の 1 件だけ残る
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind, MessageKind::Status);
    }

    #[tokio::test]
    async fn test_fetch_preserves_append_order() {
        // テスト項目: 取得結果は追記順を保つ
        // given (前提条件):
        let store = store_with_fixture().await;
        let usecase = FetchMessagesUseCase::new(store);

        // when (操作):
        let visible = usecase.execute(name("Maria"), None).await.unwrap();

        // then (期待する結果):
        let texts: Vec<&str> = visible.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["oi galera!", "segredo", "entra na sala..."]);
    }
}
