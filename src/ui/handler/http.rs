//! HTTP API endpoint handlers.
//!
//! Handlers validate the payload at the DTO boundary, run the matching
//! usecase and translate its error taxonomy into a status code. No state is
//! touched before validation succeeds.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
};

use crate::{
    domain::ParticipantName,
    infrastructure::dto::http::{JoinRequest, MessageDto, ParticipantDto, SendMessageRequest},
    ui::state::{AppState, RecentQuery},
    usecase::{
        FetchMessagesUseCase, HeartbeatError, HeartbeatUseCase, JoinError, JoinRoomUseCase,
        LeaveError, LeaveRoomUseCase, SendMessageError, SendMessageUseCase,
    },
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Register a participant and append the join announcement
pub async fn join(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<JoinRequest>,
) -> Result<(StatusCode, Json<ParticipantDto>), StatusCode> {
    let name = match payload.parse() {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!("Invalid join payload: {}", e);
            return Err(StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    let usecase = JoinRoomUseCase::new(state.participants.clone(), state.messages.clone());
    match usecase.execute(name).await {
        Ok(participant) => {
            tracing::info!("Participant '{}' joined the room", participant.name);
            Ok((StatusCode::CREATED, Json(ParticipantDto::from_domain(&participant))))
        }
        Err(JoinError::NameTaken(name)) => {
            tracing::warn!("Participant name '{}' is already taken", name);
            Err(StatusCode::CONFLICT)
        }
        Err(JoinError::Storage(e)) => {
            tracing::error!("Join failed on storage: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// List currently-present participants
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ParticipantDto>>, StatusCode> {
    match state.participants.list().await {
        Ok(participants) => Ok(Json(
            participants.iter().map(ParticipantDto::from_domain).collect(),
        )),
        Err(e) => {
            tracing::error!("Listing participants failed on storage: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Append a chat or private chat message from the authenticated sender
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageDto>), StatusCode> {
    let sender = sender_from_headers(&headers)?;
    let payload = match payload.parse() {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("Invalid message payload from '{}': {}", sender, e);
            return Err(StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    let usecase = SendMessageUseCase::new(state.participants.clone(), state.messages.clone());
    match usecase
        .execute(sender, payload.to, payload.text, payload.kind)
        .await
    {
        Ok(message) => Ok((StatusCode::CREATED, Json(MessageDto::from_domain(&message)))),
        Err(SendMessageError::SenderNotPresent(name)) => {
            tracing::warn!("Rejected message from absent sender '{}'", name);
            Err(StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(SendMessageError::Storage(e)) => {
            tracing::error!("Message append failed on storage: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Fetch the last `limit` (or all) messages visible to the requester
pub async fn fetch_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<MessageDto>>, StatusCode> {
    let requester = sender_from_headers(&headers)?;

    let usecase = FetchMessagesUseCase::new(state.messages.clone());
    match usecase.execute(requester, query.limit()).await {
        Ok(messages) => Ok(Json(messages.iter().map(MessageDto::from_domain).collect())),
        Err(e) => {
            tracing::error!("Fetching messages failed on storage: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Refresh the sender's liveness clock
pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    let sender = sender_from_headers(&headers)?;

    let usecase = HeartbeatUseCase::new(state.participants.clone());
    match usecase.execute(sender).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(HeartbeatError::NotFound(name)) => {
            tracing::warn!("Heartbeat from unregistered participant '{}'", name);
            Err(StatusCode::NOT_FOUND)
        }
        Err(HeartbeatError::Storage(e)) => {
            tracing::error!("Heartbeat failed on storage: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Remove the sender from the room and append the leave announcement
pub async fn leave(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    let sender = sender_from_headers(&headers)?;

    let usecase = LeaveRoomUseCase::new(state.participants.clone(), state.messages.clone());
    match usecase.execute(sender).await {
        Ok(removed) => {
            tracing::info!("Participant '{}' left the room", removed.name);
            Ok(StatusCode::OK)
        }
        Err(LeaveError::NotFound(name)) => {
            tracing::warn!("Leave request from unregistered participant '{}'", name);
            Err(StatusCode::NOT_FOUND)
        }
        Err(LeaveError::Storage(e)) => {
            tracing::error!("Leave failed on storage: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Extract the authenticated sender name from the `User` header.
fn sender_from_headers(headers: &HeaderMap) -> Result<ParticipantName, StatusCode> {
    let raw = headers
        .get("user")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    ParticipantName::new(raw.to_string()).map_err(|e| {
        tracing::warn!("Invalid User header: {}", e);
        StatusCode::UNPROCESSABLE_ENTITY
    })
}
