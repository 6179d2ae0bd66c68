//! Shared chat room server with presence tracking and announcements.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin varanda-server
//! ```

use clap::Parser;

use varanda::{ServerConfig, common::logger::setup_logger};

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    // Run the server
    if let Err(e) = varanda::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
