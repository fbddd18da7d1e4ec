//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::EnvelopeError;

/// メッセージ中継処理のエラー
///
/// 中継はフレーム単位で失敗します。エラーはログに記録してフレームを破棄する
/// だけで、接続は開いたまま維持されます。
#[derive(Debug, Error)]
pub enum RelayError {
    /// 受信フレームが JSON オブジェクトとして解釈できない
    #[error("malformed frame: {0}")]
    MalformedFrame(#[from] EnvelopeError),
}
