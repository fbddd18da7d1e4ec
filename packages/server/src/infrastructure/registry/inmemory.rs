//! InMemory ConnectionRegistry 実装
//!
//! ## 責務
//!
//! - 接続中のクライアントの `UnboundedSender` を管理
//! - 全接続への同一フレームのブロードキャスト
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`src/ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、フレーム送信に使用します。
//!
//! メンバーシップの変更とブロードキャストの走査は同じ Mutex で保護されます。
//! 切断と同時に進行中のブロードキャストがあっても、解体途中のエントリへの
//! 送信は発生しません。`UnboundedSender::send` はブロックしないため、
//! ロックを保持したまま走査しても遅いクライアントで停止することはありません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, ConnectionRegistry, FrameSender};

/// インメモリ ConnectionRegistry 実装
///
/// 接続中のクライアントと対応する WebSocket sender のマップを保持し、
/// ドメイン層の ConnectionRegistry trait を実装します（依存性の逆転）。
pub struct InMemoryConnectionRegistry {
    /// 接続中のクライアントの WebSocket sender
    ///
    /// Key: ConnectionId
    /// Value: FrameSender
    connections: Mutex<HashMap<ConnectionId, FrameSender>>,
}

impl InMemoryConnectionRegistry {
    /// 新しい InMemoryConnectionRegistry を作成
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(&self, connection_id: ConnectionId, sender: FrameSender) {
        let mut connections = self.connections.lock().await;
        connections.insert(connection_id.clone(), sender);
        tracing::debug!("Connection '{}' registered", connection_id);
    }

    async fn deregister(&self, connection_id: &ConnectionId) {
        let mut connections = self.connections.lock().await;
        if connections.remove(connection_id).is_some() {
            tracing::debug!("Connection '{}' deregistered", connection_id);
        }
    }

    async fn broadcast(&self, frame: &str) -> usize {
        let connections = self.connections.lock().await;

        let mut delivered = 0;
        for (connection_id, sender) in connections.iter() {
            // 一部の送信失敗を許容し、残りの接続への配送は継続する
            if let Err(e) = sender.send(frame.to_string()) {
                tracing::warn!(
                    "Failed to push frame to connection '{}': {}",
                    connection_id,
                    e
                );
            } else {
                delivered += 1;
            }
        }

        delivered
    }

    async fn connection_count(&self) -> usize {
        let connections = self.connections.lock().await;
        connections.len()
    }
}
