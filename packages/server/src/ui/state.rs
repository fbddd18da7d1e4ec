//! Server state shared across handlers.

use std::sync::Arc;

use crate::{domain::ConnectionRegistry, usecase::RelayMessageUseCase};

/// Shared application state
pub struct AppState {
    /// ConnectionRegistry（接続管理の抽象化）
    pub registry: Arc<dyn ConnectionRegistry>,
    /// RelayMessageUseCase（メッセージ中継のユースケース）
    pub relay_message_usecase: Arc<RelayMessageUseCase>,
}
