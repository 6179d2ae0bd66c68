//! InMemory ParticipantRegistry 実装
//!
//! ドメイン層が定義する ParticipantRegistry trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! 名前の一意性はロック越しの check-and-insert で保証します。lookup と
//! insert を別々のロック取得で行うと check-then-act 競合になるため、
//! 必ず単一のロック区間内で実行します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Participant, ParticipantName, ParticipantRegistry, RepositoryError, Timestamp};

/// インメモリ ParticipantRegistry 実装
///
/// ドメイン層の ParticipantRegistry trait を実装します（依存性の逆転）。
#[derive(Default)]
pub struct InMemoryParticipantRegistry {
    /// 現在在室中の参加者（キー: 参加者名）
    participants: Mutex<HashMap<String, Participant>>,
}

impl InMemoryParticipantRegistry {
    /// 新しい InMemoryParticipantRegistry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRegistry for InMemoryParticipantRegistry {
    async fn register(&self, participant: Participant) -> Result<(), RepositoryError> {
        // check と insert を同一ロック区間で行う（linearizable な登録）
        let mut participants = self.participants.lock().await;
        let key = participant.name.as_str().to_string();
        if participants.contains_key(&key) {
            return Err(RepositoryError::NameTaken(key));
        }
        participants.insert(key, participant);
        Ok(())
    }

    async fn touch(&self, name: &ParticipantName, now: Timestamp) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        match participants.get_mut(name.as_str()) {
            Some(participant) => {
                participant.touch(now);
                Ok(())
            }
            None => Err(RepositoryError::ParticipantNotFound(
                name.as_str().to_string(),
            )),
        }
    }

    async fn contains(&self, name: &ParticipantName) -> Result<bool, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.contains_key(name.as_str()))
    }

    async fn list(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        let mut snapshot: Vec<Participant> = participants.values().cloned().collect();
        // Sort by name for consistent ordering
        snapshot.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(snapshot)
    }

    async fn remove(&self, name: &ParticipantName) -> Result<Participant, RepositoryError> {
        let mut participants = self.participants.lock().await;
        participants
            .remove(name.as_str())
            .ok_or_else(|| RepositoryError::ParticipantNotFound(name.as_str().to_string()))
    }

    async fn remove_stale(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError> {
        // touch と同じロックの下で staleness を判定するので、掃引と競合した
        // ハートビートの更新が失われることはない
        let mut participants = self.participants.lock().await;
        let mut removed = Vec::new();
        participants.retain(|_, participant| {
            if participant.is_stale(cutoff) {
                removed.push(participant.clone());
                false
            } else {
                true
            }
        });
        Ok(removed)
    }
}
