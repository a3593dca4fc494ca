/// 受信イベントのログ出力
///
/// ハンドラーはグローバルなロガーを直接参照せず、
/// 起動時に構築した`EventLogger`を受け取って使用する。
use tracing::info;

use crate::domain::InvocationContext;

/// 受信イベントのログ出力を抽象化するトレイト
///
/// 本番ではtracingに出力し、テストではモックで呼び出し内容を記録する。
pub trait EventLogger: Send + Sync {
    /// 受信イベントをINFOレベルで1行出力
    ///
    /// # 引数
    /// * `ctx` - 呼び出しコンテキスト（request_idをフィールドとして付与）
    /// * `event_json` - JSONシリアライズ済みのイベント
    fn event_received(&self, ctx: &InvocationContext, event_json: &str);
}

/// tracingへ出力するEventLogger実装
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventLogger;

impl TracingEventLogger {
    pub fn new() -> Self {
        Self
    }
}

impl EventLogger for TracingEventLogger {
    fn event_received(&self, ctx: &InvocationContext, event_json: &str) {
        info!(request_id = %ctx.request_id, "Received event: {}", event_json);
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::infrastructure::logging::{build_json_subscriber, CapturedLogs};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    /// ユニットテスト用のモックEventLogger
    ///
    /// 出力内容を(request_id, 行)の組で記録する。
    #[derive(Debug, Clone, Default)]
    pub struct RecordingEventLogger {
        entries: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl RecordingEventLogger {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn entries(&self) -> Vec<(String, String)> {
            self.entries.lock().unwrap().clone()
        }

        pub fn entry_count(&self) -> usize {
            self.entries.lock().unwrap().len()
        }
    }

    impl EventLogger for RecordingEventLogger {
        fn event_received(&self, ctx: &InvocationContext, event_json: &str) {
            self.entries.lock().unwrap().push((
                ctx.request_id.clone(),
                format!("Received event: {}", event_json),
            ));
        }
    }

    /// TracingEventLoggerがINFOレベルで1行だけ出力する
    #[test]
    fn test_tracing_event_logger_emits_single_info_line() {
        let logs = CapturedLogs::new();
        let subscriber = build_json_subscriber(EnvFilter::new("info"), logs.clone());
        let logger = TracingEventLogger::new();
        let ctx = InvocationContext::new("req-123");

        tracing::subscriber::with_default(subscriber, || {
            logger.event_received(&ctx, r#"{"a":1}"#);
        });

        let lines = logs.json_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["level"], "INFO");
        assert_eq!(lines[0]["message"], r#"Received event: {"a":1}"#);
        assert_eq!(lines[0]["request_id"], "req-123");
    }

    /// 人間向けフォーマットでも同じ内容が出力される
    #[test]
    fn test_tracing_event_logger_plain_format() {
        let logs = CapturedLogs::new();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let logger = TracingEventLogger::new();

        tracing::subscriber::with_default(subscriber, || {
            logger.event_received(&InvocationContext::new("req-456"), "null");
        });

        let lines = logs.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("Received event: null"));
        assert!(lines[0].contains("request_id=req-456"));
    }

    /// モックが呼び出し内容をそのまま記録する
    #[test]
    fn test_recording_event_logger_records_line() {
        let logger = RecordingEventLogger::new();
        let ctx = InvocationContext::new("req-abc");

        logger.event_received(&ctx, r#"{"key":"value"}"#);

        assert_eq!(logger.entry_count(), 1);
        assert_eq!(
            logger.entries()[0],
            (
                "req-abc".to_string(),
                r#"Received event: {"key":"value"}"#.to_string()
            )
        );
    }

    /// クローンしたモックは記録を共有する
    #[test]
    fn test_recording_event_logger_clone_shares_entries() {
        let logger = RecordingEventLogger::new();
        let cloned = logger.clone();

        cloned.event_received(&InvocationContext::default(), "{}");

        assert_eq!(logger.entry_count(), 1);
    }
}
