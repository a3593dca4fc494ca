/// ログ基盤モジュール
///
/// Lambda環境向けの構造化ログ設定を提供する。
/// tracingクレートを使用し、JSON形式での出力をサポートする。
use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// JSON形式での構造化ログ出力を設定し、環境変数`RUST_LOG`または
/// デフォルトのログレベル（info）でフィルタリングを行う。
///
/// プロセス全体に影響するのはこの関数のみで、`main`の先頭で一度だけ呼ぶ。
/// 複数回呼び出しても最初の呼び出しのみ初期化を実行する。
///
/// # 使用例
/// ```ignore
/// use hello_lambda::infrastructure::init_logging;
///
/// init_logging();
/// tracing::info!("Lambda function started");
/// ```
pub fn init_logging() {
    INIT.call_once(|| {
        // 環境変数からログレベルを取得、デフォルトはinfo
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // 既に別のサブスクライバーが設定されている場合（テスト等）は何もしない
        let _ = build_json_subscriber(env_filter, std::io::stdout).try_init();
    });
}

/// JSON形式のサブスクライバーを構築する（CloudWatch向け）
///
/// イベントのフィールドはトップレベルに展開され、
/// target、ファイル名、行番号が付与される。
pub fn build_json_subscriber<W>(env_filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .flatten_event(true)
        .with_current_span(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
///
/// # 注意
/// この関数はテスト専用であり、本番環境では`init_logging`を使用すること。
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}

/// テスト用のログ出力バッファ
///
/// `MakeWriter`としてサブスクライバーに渡し、出力された行を検証する。
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    buffer: std::sync::Arc<std::sync::Mutex<Vec<u8>>>,
}

#[cfg(test)]
impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// 出力された行を取得
    pub fn lines(&self) -> Vec<String> {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// 出力された行をJSONとしてパースして取得
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.lines()
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

#[cfg(test)]
impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
