//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{domain::ConnectionRegistry, usecase::RelayMessageUseCase};

use super::{
    handler::{health_check, relay_status, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket relay server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(registry, relay_message_usecase);
/// server.run("127.0.0.1".to_string(), 8040).await?;
/// ```
pub struct Server {
    /// ConnectionRegistry（接続管理の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// RelayMessageUseCase（メッセージ中継のユースケース）
    relay_message_usecase: Arc<RelayMessageUseCase>,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `registry` - Registry holding every live connection
    /// * `relay_message_usecase` - UseCase for relaying inbound frames
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        relay_message_usecase: Arc<RelayMessageUseCase>,
    ) -> Self {
        Self {
            registry,
            relay_message_usecase,
        }
    }

    /// Run the WebSocket relay server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8040)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            registry: self.registry,
            relay_message_usecase: self.relay_message_usecase,
        });

        // Define handlers
        let app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/status", get(relay_status))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "WebSocket relay server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
