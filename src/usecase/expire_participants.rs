//! UseCase: 滞留参加者の掃引処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ExpireParticipantsUseCase::execute() メソッド
//! - staleness window を超えた参加者の除去と退室アナウンスの追記
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：ハートビートが新しい参加者を誤って除去しない
//! - 除去 1 件につき退室アナウンスがちょうど 1 件追記されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：stale な参加者だけが除去される
//! - エッジケース：除去対象なし（アナウンスも 0 件）

use std::sync::Arc;
use std::time::Duration;

use crate::common::time::get_brt_timestamp;
use crate::domain::{MessageStore, Participant, ParticipantRegistry, Timestamp};

use super::{error::SweepError, presence_announcer::PresenceAnnouncer};

/// 滞留参加者掃引のユースケース
pub struct ExpireParticipantsUseCase {
    /// ParticipantRegistry（データアクセス層の抽象化）
    participants: Arc<dyn ParticipantRegistry>,
    /// 退室アナウンスの発行先
    announcer: PresenceAnnouncer,
}

impl ExpireParticipantsUseCase {
    /// 新しい ExpireParticipantsUseCase を作成
    pub fn new(participants: Arc<dyn ParticipantRegistry>, messages: Arc<dyn MessageStore>) -> Self {
        Self {
            participants,
            announcer: PresenceAnnouncer::new(messages),
        }
    }

    /// 掃引を実行
    ///
    /// # Arguments
    ///
    /// * `stale_after` - 最後のハートビートからこの時間を超えた参加者を除去する
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Participant>)` - 除去された参加者（それぞれに退室アナウンス済み）
    /// * `Err(SweepError)` - 掃引失敗
    pub async fn execute(&self, stale_after: Duration) -> Result<Vec<Participant>, SweepError> {
        let now = Timestamp::new(get_brt_timestamp());
        let cutoff = now.sub_millis(stale_after.as_millis() as i64);

        // staleness の最終判定は registry が削除時に行う（touch との競合に安全）
        let removed = self
            .participants
            .remove_stale(cutoff)
            .await
            .map_err(SweepError::Storage)?;

        for participant in &removed {
            // 除去は既に成立しているので、アナウンスの追記失敗は警告ログのみ
            if let Err(e) = self.announcer.announce_leave(participant).await {
                tracing::warn!(
                    "Failed to append leave announcement for expired participant '{}': {}",
                    participant.name,
                    e
                );
            }
        }

        Ok(removed)
    }
}
