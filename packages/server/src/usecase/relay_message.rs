//! UseCase: メッセージ中継処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayMessageUseCase::execute() メソッド
//! - メッセージ中継処理（パース、受信時刻の付与、全接続へのブロードキャスト）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：送信者を含む全ての接続に同一フレームが配送される
//! - サーバー受信時刻（time フィールド）が付与・上書きされることを確認
//! - 不正なフレームがブロードキャストされずに破棄されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：JSON オブジェクトの中継と time 付与
//! - 異常系：JSON として解釈できないフレーム、オブジェクト以外の JSON 値
//! - エッジケース：接続が存在しない場合（配送数 0）

use std::sync::Arc;

use chukei_shared::time::{Clock, timestamp_to_utc_rfc3339};

use crate::domain::{ConnectionRegistry, Envelope};

use super::error::RelayError;

/// メッセージ中継のユースケース
pub struct RelayMessageUseCase {
    /// ConnectionRegistry（接続管理の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// Clock（受信時刻の抽象化）
    clock: Arc<dyn Clock>,
}

impl RelayMessageUseCase {
    /// 新しい RelayMessageUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    /// メッセージ中継を実行
    ///
    /// # Arguments
    ///
    /// * `raw` - 受信したテキストフレーム
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - フレームを配送できた接続数（送信者を含む）
    /// * `Err(RelayError)` - フレームが不正（破棄対象）
    pub async fn execute(&self, raw: &str) -> Result<usize, RelayError> {
        // 1. パース（JSON オブジェクトのみ受理）
        let mut envelope = Envelope::parse(raw)?;

        // 2. サーバー受信時刻を付与（クライアント指定の time は上書き）
        let received_at = timestamp_to_utc_rfc3339(self.clock.now_utc_millis());
        envelope.stamp(received_at);

        // 3. 一度だけシリアライズし、送信者を含む全接続へブロードキャスト
        let frame = envelope.to_frame();
        let delivered = self.registry.broadcast(&frame).await;

        Ok(delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockConnectionRegistry;
    use chukei_shared::time::FixedClock;
    use serde_json::Value;

    // 2023-01-01 00:00:00 UTC in milliseconds
    const FIXED_MILLIS: i64 = 1672531200000;
    const FIXED_RFC3339: &str = "2023-01-01T00:00:00.000Z";

    fn create_usecase(registry: MockConnectionRegistry) -> RelayMessageUseCase {
        RelayMessageUseCase::new(Arc::new(registry), Arc::new(FixedClock::new(FIXED_MILLIS)))
    }

    #[tokio::test]
    async fn test_relay_stamps_receipt_time() {
        // テスト項目: 中継されるフレームにサーバー受信時刻が付与される
        // given (前提条件):
        let mut registry = MockConnectionRegistry::new();
        registry
            .expect_broadcast()
            .withf(|frame: &str| {
                let parsed: Value = serde_json::from_str(frame).unwrap();
                parsed["user"] == "alice"
                    && parsed["text"] == "hi"
                    && parsed["time"] == FIXED_RFC3339
            })
            .times(1)
            .returning(|_| 2);
        let usecase = create_usecase(registry);

        // when (操作):
        let result = usecase.execute(r#"{"user":"alice","text":"hi"}"#).await;

        // then (期待する結果):
        assert_eq!(result.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_relay_overwrites_client_supplied_time() {
        // テスト項目: クライアントが指定した time フィールドが受信時刻で上書きされる
        // given (前提条件):
        let mut registry = MockConnectionRegistry::new();
        registry
            .expect_broadcast()
            .withf(|frame: &str| {
                let parsed: Value = serde_json::from_str(frame).unwrap();
                parsed["time"] == FIXED_RFC3339
            })
            .times(1)
            .returning(|_| 1);
        let usecase = create_usecase(registry);

        // when (操作):
        let result = usecase
            .execute(r#"{"text":"hi","time":"1999-12-31T23:59:59.999Z"}"#)
            .await;

        // then (期待する結果):
        assert_eq!(result.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_relay_rejects_malformed_frame_without_broadcasting() {
        // テスト項目: JSON として解釈できないフレームはブロードキャストされず破棄される
        // given (前提条件):
        let mut registry = MockConnectionRegistry::new();
        registry.expect_broadcast().times(0);
        let usecase = create_usecase(registry);

        // when (操作):
        let result = usecase.execute("this is not json").await;

        // then (期待する結果):
        assert!(matches!(result, Err(RelayError::MalformedFrame(_))));
    }

    #[tokio::test]
    async fn test_relay_rejects_non_object_json() {
        // テスト項目: オブジェクト以外の JSON 値（配列・スカラー）が破棄される
        // given (前提条件):
        let mut registry = MockConnectionRegistry::new();
        registry.expect_broadcast().times(0);
        let usecase = create_usecase(registry);

        // when (操作) / then (期待する結果):
        for raw in ["[1,2,3]", r#""hello""#, "42"] {
            let result = usecase.execute(raw).await;
            assert!(
                matches!(result, Err(RelayError::MalformedFrame(_))),
                "expected rejection for frame: {}",
                raw
            );
        }
    }

    #[tokio::test]
    async fn test_relay_with_no_connections_delivers_to_nobody() {
        // テスト項目: 接続が存在しない場合も中継自体は成功し、配送数は 0
        // given (前提条件):
        let mut registry = MockConnectionRegistry::new();
        registry.expect_broadcast().times(1).returning(|_| 0);
        let usecase = create_usecase(registry);

        // when (操作):
        let result = usecase.execute(r#"{"user":"alice","text":"hi"}"#).await;

        // then (期待する結果):
        assert_eq!(result.unwrap(), 0);
    }
}
