//! Connection identity.

use uuid::Uuid;

/// Server-assigned identifier for one WebSocket connection.
///
/// The relay protocol carries no client identity, so every accepted
/// connection gets a fresh id for registry keys and log lines. The id never
/// appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Generate a new unique connection id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_returns_unique_ids() {
        // テスト項目: generate が毎回異なる ID を返す
        // given (前提条件):

        // when (操作):
        let id1 = ConnectionId::generate();
        let id2 = ConnectionId::generate();

        // then (期待する結果):
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_display_matches_as_str() {
        // テスト項目: Display 表示が as_str と一致する
        // given (前提条件):
        let id = ConnectionId::generate();

        // when (操作):
        let displayed = id.to_string();

        // then (期待する結果):
        assert_eq!(displayed, id.as_str());
    }
}
