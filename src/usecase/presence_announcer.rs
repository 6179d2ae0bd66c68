//! 在室状況アナウンサー
//!
//! Registry の join / leave イベントに対応する status メッセージを組み立てて
//! MessageStore に追記します。入退室 1 回につきアナウンスはちょうど 1 件。

use std::sync::Arc;

use crate::common::time::get_brt_timestamp;
use crate::domain::{
    Message, MessageDraft, MessageStore, MessageText, Participant, RepositoryError, Timestamp,
};

/// 入室アナウンスの本文
pub const JOIN_ANNOUNCEMENT: &str = "entra na sala...";
/// 退室アナウンスの本文
pub const LEAVE_ANNOUNCEMENT: &str = "sai da sala...";

/// 在室状況の変化を status メッセージとしてログに残すコンポーネント
pub struct PresenceAnnouncer {
    /// MessageStore（データアクセス層の抽象化）
    messages: Arc<dyn MessageStore>,
}

impl PresenceAnnouncer {
    /// 新しい PresenceAnnouncer を作成
    pub fn new(messages: Arc<dyn MessageStore>) -> Self {
        Self { messages }
    }

    /// 入室アナウンスを追記する
    pub async fn announce_join(
        &self,
        participant: &Participant,
    ) -> Result<Message, RepositoryError> {
        self.announce(participant, JOIN_ANNOUNCEMENT).await
    }

    /// 退室アナウンスを追記する
    ///
    /// 対象の参加者は既に registry から削除されていてよい（status メッセージは
    /// 送信者の在室チェックを受けない）。
    pub async fn announce_leave(
        &self,
        participant: &Participant,
    ) -> Result<Message, RepositoryError> {
        self.announce(participant, LEAVE_ANNOUNCEMENT).await
    }

    async fn announce(
        &self,
        participant: &Participant,
        text: &str,
    ) -> Result<Message, RepositoryError> {
        let text = MessageText::new(text.to_string()).expect("announcement text is valid");
        let draft = MessageDraft::status(participant.name.clone(), text);
        let now = Timestamp::new(get_brt_timestamp());
        self.messages.append(draft, now).await
    }
}
