//! InMemory MessageStore 実装
//!
//! ドメイン層が定義する MessageStore trait の具体的な実装。
//! Vec を追記専用ログとして使用します。更新・削除の操作は存在しません。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Message, MessageDraft, MessageIdFactory, MessageStore, RepositoryError, Timestamp,
};

/// インメモリ MessageStore 実装
///
/// ドメイン層の MessageStore trait を実装します（依存性の逆転）。
/// append はログのロックで直列化されるため、sent_at と追記順は常に一致します。
#[derive(Default)]
pub struct InMemoryMessageStore {
    /// 追記順のメッセージログ
    log: Mutex<Vec<Message>>,
}

impl InMemoryMessageStore {
    /// 新しい InMemoryMessageStore を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn append(
        &self,
        draft: MessageDraft,
        now: Timestamp,
    ) -> Result<Message, RepositoryError> {
        let mut log = self.log.lock().await;
        // 壁時計が巻き戻っても sent_at が追記順に対して単調であることを保つ
        let sent_at = match log.last() {
            Some(tail) => now.max(tail.sent_at),
            None => now,
        };
        let message = Message::from_draft(draft, MessageIdFactory::generate(), sent_at);
        log.push(message.clone());
        Ok(message)
    }

    async fn recent(&self, limit: Option<usize>) -> Result<Vec<Message>, RepositoryError> {
        let log = self.log.lock().await;
        match limit {
            // 末尾 k 件を元の相対順で返す（先頭 k 件ではない）
            Some(k) => Ok(log[log.len().saturating_sub(k)..].to_vec()),
            None => Ok(log.clone()),
        }
    }
}
