//! UseCase: ハートビート処理
//!
//! 在室中の参加者の liveness クロックをリセットします。既に退室・失効した
//! 参加者を復活させることはありません。

use std::sync::Arc;

use crate::common::time::get_brt_timestamp;
use crate::domain::{ParticipantName, ParticipantRegistry, RepositoryError, Timestamp};

use super::error::HeartbeatError;

/// ハートビートのユースケース
pub struct HeartbeatUseCase {
    /// ParticipantRegistry（データアクセス層の抽象化）
    participants: Arc<dyn ParticipantRegistry>,
}

impl HeartbeatUseCase {
    /// 新しい HeartbeatUseCase を作成
    pub fn new(participants: Arc<dyn ParticipantRegistry>) -> Self {
        Self { participants }
    }

    /// ハートビートを実行
    ///
    /// # Arguments
    ///
    /// * `name` - 対象の参加者名（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - last_seen_at を更新した
    /// * `Err(HeartbeatError)` - 対象が在室していない、またはストレージ障害
    pub async fn execute(&self, name: ParticipantName) -> Result<(), HeartbeatError> {
        let now = Timestamp::new(get_brt_timestamp());
        self.participants
            .touch(&name, now)
            .await
            .map_err(|e| match e {
                RepositoryError::ParticipantNotFound(name) => HeartbeatError::NotFound(name),
                other => HeartbeatError::Storage(other),
            })
    }
}
