//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{domain::ConnectionId, ui::state::AppState};

/// Accept a WebSocket upgrade on `/ws`.
///
/// The relay has no handshake beyond the protocol upgrade: no query
/// parameters, no authentication, no connection limit. Identity is assigned
/// server-side once the socket is established.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound flow: frames broadcast by the relay
/// (via the rx channel) are sent to this client's WebSocket connection.
///
/// # Arguments
///
/// * `rx` - Channel receiver for frames broadcast to this connection
/// * `sender` - WebSocket sink to send frames to this client
///
/// # Returns
///
/// A `JoinHandle` for the spawned task
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            // Send the frame to this client
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Register this connection before any frame can arrive
    let connection_id = ConnectionId::generate();
    let (tx, rx) = mpsc::unbounded_channel();
    state.registry.register(connection_id.clone(), tx).await;
    tracing::info!("Client '{}' connected and registered", connection_id);

    let connection_id_for_recv = connection_id.clone();
    let state_for_recv = state.clone();

    // Spawn a task to receive frames from this client and relay them
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!(
                        "WebSocket error on '{}': {}",
                        connection_id_for_recv,
                        e
                    );
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::info!("Received text from '{}': {}", connection_id_for_recv, text);

                    match state_for_recv.relay_message_usecase.execute(&text).await {
                        Ok(delivered) => {
                            tracing::debug!(
                                "Relayed frame from '{}' to {} connection(s)",
                                connection_id_for_recv,
                                delivered
                            );
                        }
                        Err(e) => {
                            // Malformed frames are dropped; the connection stays open
                            tracing::warn!(
                                "Discarding frame from '{}': {}",
                                connection_id_for_recv,
                                e
                            );
                        }
                    }
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", connection_id_for_recv);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to forward broadcast frames to this client
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state.registry.deregister(&connection_id).await;
    tracing::info!(
        "Client '{}' disconnected and removed from registry",
        connection_id
    );
}
