//! UseCase: 入室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - 参加者の登録処理（名前の一意性、入室アナウンスの追記）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：同名の二重入室を防ぐ
//! - 入室成功 1 回につきアナウンスがちょうど 1 件追記されることを保証
//! - アナウンスの追記失敗が入室の成立を巻き戻さないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の入室
//! - 異常系：既に使われている名前での入室試行
//! - エッジケース：アナウンス追記の失敗（ログに残すだけで入室は成立）

use std::sync::Arc;

use crate::common::time::get_brt_timestamp;
use crate::domain::{
    MessageStore, Participant, ParticipantName, ParticipantRegistry, RepositoryError, Timestamp,
};

use super::{error::JoinError, presence_announcer::PresenceAnnouncer};

/// 入室のユースケース
pub struct JoinRoomUseCase {
    /// ParticipantRegistry（データアクセス層の抽象化）
    participants: Arc<dyn ParticipantRegistry>,
    /// 入室アナウンスの発行先
    announcer: PresenceAnnouncer,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(participants: Arc<dyn ParticipantRegistry>, messages: Arc<dyn MessageStore>) -> Self {
        Self {
            participants,
            announcer: PresenceAnnouncer::new(messages),
        }
    }

    /// 入室を実行
    ///
    /// # Arguments
    ///
    /// * `name` - 入室する参加者の名前（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(Participant)` - 入室成功
    /// * `Err(JoinError)` - 入室失敗
    pub async fn execute(&self, name: ParticipantName) -> Result<Participant, JoinError> {
        let now = Timestamp::new(get_brt_timestamp());
        let participant = Participant::new(name, now);

        // 1. Registry へ原子的に登録（check-and-insert は registry 側で直列化される）
        self.participants
            .register(participant.clone())
            .await
            .map_err(|e| match e {
                RepositoryError::NameTaken(name) => JoinError::NameTaken(name),
                other => JoinError::Storage(other),
            })?;

        // 2. 入室アナウンスを追記。登録は既に成立しているので、追記失敗は
        //    警告ログに残すだけで入室自体は成功として返す
        if let Err(e) = self.announcer.announce_join(&participant).await {
            tracing::warn!(
                "Failed to append join announcement for '{}': {}",
                participant.name,
                e
            );
        }

        Ok(participant)
    }
}
