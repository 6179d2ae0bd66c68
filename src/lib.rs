//! Shared chat room server library.
//!
//! This library implements the server side of a single shared chat room:
//! a registry of currently-present participants, an append-only message log
//! and automatic presence announcements, behind a thin Axum transport.

pub mod common;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run_server;
