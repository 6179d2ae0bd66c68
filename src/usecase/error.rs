//! UseCase 層のエラー定義
//!
//! Repository のエラーを各操作のエラー分類へ変換します。検証・認可エラーは
//! 状態変更の前に検出され、ストレージ障害は not-found と区別できる形で
//! 伝播します（呼び出し側がリトライ可能）。

use thiserror::Error;

use crate::domain::RepositoryError;

/// 入室処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// 同名の参加者が既に在室している
    #[error("participant name '{0}' is already taken")]
    NameTaken(String),

    /// ストレージ障害
    #[error("storage failure: {0}")]
    Storage(RepositoryError),
}

/// メッセージ送信処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// 送信者が在室していない
    #[error("sender '{0}' is not present in the room")]
    SenderNotPresent(String),

    /// ストレージ障害
    #[error("storage failure: {0}")]
    Storage(RepositoryError),
}

/// メッセージ取得処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchMessagesError {
    /// ストレージ障害
    #[error("storage failure: {0}")]
    Storage(RepositoryError),
}

/// ハートビート処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeartbeatError {
    /// 対象の参加者が在室していない
    #[error("participant '{0}' is not registered")]
    NotFound(String),

    /// ストレージ障害
    #[error("storage failure: {0}")]
    Storage(RepositoryError),
}

/// 退室処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeaveError {
    /// 対象の参加者が在室していない
    #[error("participant '{0}' is not registered")]
    NotFound(String),

    /// ストレージ障害
    #[error("storage failure: {0}")]
    Storage(RepositoryError),
}

/// 滞留参加者の掃引処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SweepError {
    /// ストレージ障害
    #[error("storage failure: {0}")]
    Storage(RepositoryError),
}
