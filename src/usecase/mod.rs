//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod error;
pub mod expire_participants;
pub mod fetch_messages;
pub mod heartbeat;
pub mod join_room;
pub mod leave_room;
pub mod presence_announcer;
pub mod send_message;

pub use error::{
    FetchMessagesError, HeartbeatError, JoinError, LeaveError, SendMessageError, SweepError,
};
pub use expire_participants::ExpireParticipantsUseCase;
pub use fetch_messages::FetchMessagesUseCase;
pub use heartbeat::HeartbeatUseCase;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use presence_announcer::PresenceAnnouncer;
pub use send_message::SendMessageUseCase;
