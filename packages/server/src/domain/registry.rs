//! ConnectionRegistry trait 定義
//!
//! ドメイン層が必要とする接続管理のインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::ConnectionId;

/// Channel handing outbound frames to a connection's pusher task.
///
/// `UnboundedSender::send` never blocks, so a broadcast can fan out without
/// waiting on any individual socket. Each connection's pusher task drains its
/// receiver, so a slow client stalls only its own task.
pub type FrameSender = mpsc::UnboundedSender<String>;

/// Connection Registry trait
///
/// 接続中のクライアントの唯一のインデックス。
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// 接続を登録（接続確立時に一度だけ呼ばれる）
    async fn register(&self, connection_id: ConnectionId, sender: FrameSender);

    /// 接続を登録解除（冪等）
    async fn deregister(&self, connection_id: &ConnectionId);

    /// 登録中の全ての接続に同一のフレームを送信し、送信できた接続数を返す
    ///
    /// 個々の送信失敗はログに記録してスキップする（他の接続への配送は継続）。
    async fn broadcast(&self, frame: &str) -> usize;

    /// 登録中の接続数を取得
    async fn connection_count(&self) -> usize;
}
