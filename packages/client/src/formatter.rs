//! Message formatting utilities for client display.

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a relayed chat message
    ///
    /// # Arguments
    ///
    /// * `from` - The user name of the sender
    /// * `content` - The message content
    /// * `relayed_at` - RFC 3339 server receipt time carried in the frame
    ///
    /// # Returns
    ///
    /// A formatted string with the chat message
    pub fn format_chat_message(from: &str, content: &str, relayed_at: &str) -> String {
        let timestamp_str = Self::format_display_time(relayed_at);
        format!(
            "\n\n------------------------------------------------------------\n\
             @{}: {}\n\
             relayed at {}\n\
             ------------------------------------------------------------\n",
            from, content, timestamp_str
        )
    }

    /// Format a binary message notification
    ///
    /// # Arguments
    ///
    /// * `byte_count` - The number of bytes received
    ///
    /// # Returns
    ///
    /// A formatted string with the binary data notification
    pub fn format_binary_message(byte_count: usize) -> String {
        format!("\n← Received {} bytes of binary data\n", byte_count)
    }

    /// Format a raw text message (when the frame is not a chat message)
    ///
    /// # Arguments
    ///
    /// * `text` - The raw text received
    ///
    /// # Returns
    ///
    /// A formatted string with the raw message
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }

    /// Render an RFC 3339 timestamp for display, falling back to the raw
    /// string when it does not parse
    fn format_display_time(time: &str) -> String {
        match chrono::DateTime::parse_from_rfc3339(time) {
            Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            Err(_) => time.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_chat_message() {
        // テスト項目: チャットメッセージが正しくフォーマットされる
        // given (前提条件):
        let from = "alice";
        let content = "Hello, world!";
        let relayed_at = "2023-01-01T00:00:00.000Z";

        // when (操作):
        let result = MessageFormatter::format_chat_message(from, content, relayed_at);

        // then (期待する結果):
        assert!(result.contains("@alice:"));
        assert!(result.contains("Hello, world!"));
        assert!(result.contains("relayed at"));
        assert!(result.contains("2023-01-01 00:00:00.000"));
        assert!(result.contains("------------------------------------------------------------"));
    }

    #[test]
    fn test_format_chat_message_with_unparseable_time() {
        // テスト項目: パースできない time はそのまま表示される
        // given (前提条件):
        let from = "bob";
        let content = "hi";
        let relayed_at = "not-a-timestamp";

        // when (操作):
        let result = MessageFormatter::format_chat_message(from, content, relayed_at);

        // then (期待する結果):
        assert!(result.contains("relayed at not-a-timestamp"));
    }

    #[test]
    fn test_format_binary_message() {
        // テスト項目: バイナリメッセージ通知が正しくフォーマットされる
        // given (前提条件):
        let byte_count = 1024;

        // when (操作):
        let result = MessageFormatter::format_binary_message(byte_count);

        // then (期待する結果):
        assert!(result.contains("1024 bytes"));
        assert!(result.contains("Received"));
    }

    #[test]
    fn test_format_raw_message() {
        // テスト項目: 生メッセージが正しくフォーマットされる
        // given (前提条件):
        let text = "unknown message format";

        // when (操作):
        let result = MessageFormatter::format_raw_message(text);

        // then (期待する結果):
        assert!(result.contains("unknown message format"));
        assert!(result.contains("Received:"));
    }
}
