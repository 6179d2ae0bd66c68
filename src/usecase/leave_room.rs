//! UseCase: 明示的な退室処理
//!
//! Registry から参加者を削除し、退室アナウンスを追記します。失効による
//! 退室（掃引）は expire_participants 側が担当します。

use std::sync::Arc;

use crate::domain::{
    MessageStore, Participant, ParticipantName, ParticipantRegistry, RepositoryError,
};

use super::{error::LeaveError, presence_announcer::PresenceAnnouncer};

/// 退室のユースケース
pub struct LeaveRoomUseCase {
    /// ParticipantRegistry（データアクセス層の抽象化）
    participants: Arc<dyn ParticipantRegistry>,
    /// 退室アナウンスの発行先
    announcer: PresenceAnnouncer,
}

impl LeaveRoomUseCase {
    /// 新しい LeaveRoomUseCase を作成
    pub fn new(participants: Arc<dyn ParticipantRegistry>, messages: Arc<dyn MessageStore>) -> Self {
        Self {
            participants,
            announcer: PresenceAnnouncer::new(messages),
        }
    }

    /// 退室を実行
    ///
    /// # Arguments
    ///
    /// * `name` - 退室する参加者名（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 削除された参加者
    /// * `Err(LeaveError)` - 対象が在室していない、またはストレージ障害
    pub async fn execute(&self, name: ParticipantName) -> Result<Participant, LeaveError> {
        let removed = self
            .participants
            .remove(&name)
            .await
            .map_err(|e| match e {
                RepositoryError::ParticipantNotFound(name) => LeaveError::NotFound(name),
                other => LeaveError::Storage(other),
            })?;

        // 削除は既に成立しているので、アナウンスの追記失敗は警告ログのみ
        if let Err(e) = self.announcer.announce_leave(&removed).await {
            tracing::warn!(
                "Failed to append leave announcement for '{}': {}",
                removed.name,
                e
            );
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageKind, Timestamp};
    use crate::infrastructure::repository::{InMemoryMessageStore, InMemoryParticipantRegistry};
    use crate::usecase::presence_announcer::LEAVE_ANNOUNCEMENT;

    fn name(value: &str) -> ParticipantName {
        ParticipantName::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_leave_removes_participant_and_announces() {
        // テスト項目: 退室で参加者が削除され、退室アナウンスが 1 件追記される
        // given (前提条件):
        let registry = Arc::new(InMemoryParticipantRegistry::new());
        registry
            .register(Participant::new(name("Maria"), Timestamp::new(1000)))
            .await
            .unwrap();
        let store = Arc::new(InMemoryMessageStore::new());
        let usecase = LeaveRoomUseCase::new(registry.clone(), store.clone());

        // when (操作):
        let result = usecase.execute(name("Maria")).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(!registry.contains(&name("Maria")).await.unwrap());

        let log = store.recent(None).await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].kind, MessageKind::Status);
        assert_eq!(log[0].text.as_str(), LEAVE_ANNOUNCEMENT);
    }

    #[tokio::test]
    async fn test_leave_unknown_participant_fails() {
        // テスト項目: 未入室の参加者の退室は NotFound になり、アナウンスされない
        // given (前提条件):
        let registry = Arc::new(InMemoryParticipantRegistry::new());
        let store = Arc::new(InMemoryMessageStore::new());
        let usecase = LeaveRoomUseCase::new(registry, store.clone());

        // when (操作):
        let result = usecase.execute(name("João")).await;

        // then (期待する結果):
        assert_eq!(result, Err(LeaveError::NotFound("João".to_string())));
        assert!(store.recent(None).await.unwrap().is_empty());
    }
}
