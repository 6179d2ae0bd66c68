//! Test server fixture shared by the integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use varanda::infrastructure::repository::{InMemoryMessageStore, InMemoryParticipantRegistry};
use varanda::ui::{app, state::AppState};

/// An application instance serving on a dedicated local port.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Spawn the router on `port` with fresh in-memory storage and wait until
    /// it accepts connections.
    pub async fn start(port: u16) -> Self {
        let state = Arc::new(AppState {
            participants: Arc::new(InMemoryParticipantRegistry::new()),
            messages: Arc::new(InMemoryMessageStore::new()),
        });

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind test port");
        tokio::spawn(async move {
            axum::serve(listener, app(state))
                .await
                .expect("Test server crashed");
        });

        for _ in 0..50 {
            if tokio::net::TcpStream::connect(addr).await.is_ok() {
                return Self { port };
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("Test server did not come up on port {port}");
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}
