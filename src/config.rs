//! Server configuration parsed from the command line.

use clap::Parser;
use std::time::Duration;

/// Shared chat room server
#[derive(Debug, Clone, Parser)]
#[command(name = "varanda-server", version)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// Seconds since the last heartbeat before a participant expires
    #[arg(long, default_value_t = 10)]
    pub stale_after_secs: u64,

    /// Seconds between staleness sweeps
    #[arg(long, default_value_t = 15)]
    pub sweep_interval_secs: u64,
}

impl ServerConfig {
    /// Staleness window as a duration.
    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_secs)
    }

    /// Sweep period as a duration.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}
