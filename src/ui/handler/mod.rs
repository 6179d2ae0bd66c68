//! Handler modules for HTTP endpoints.

pub mod http;

// Re-export HTTP handlers
pub use http::{
    fetch_messages, health_check, heartbeat, join, leave, list_participants, send_message,
};
