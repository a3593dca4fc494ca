/// Hello Lambdaエントリポイント
///
/// 受信イベントをログに出力し、イベントを埋め込んだ
/// 固定JSONレスポンスをHTTP形式のエンベロープで返却する。
use hello_lambda::application::HelloHandler;
use hello_lambda::domain::{InvocationContext, ResponseEnvelope};
use hello_lambda::infrastructure::{init_logging, EventLogger, TracingEventLogger};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("Hello Lambda関数を初期化");

    // ロガーとハンドラーは起動時に一度だけ構築し、各呼び出しで共有する
    let hello_handler = HelloHandler::new(TracingEventLogger::new());
    let hello_handler = &hello_handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(hello_handler, event).await
    }))
    .await
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. Lambdaコンテキストから呼び出しコンテキストを構築
/// 2. HelloHandlerでレスポンスを生成
/// 3. 失敗時はエラーログを出力し、呼び出しエラーとしてランタイムに返す
async fn handler<L>(
    hello_handler: &HelloHandler<L>,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error>
where
    L: EventLogger,
{
    let ctx = InvocationContext::from(&event.context);

    match hello_handler.handle(&event.payload, &ctx) {
        Ok(response) => Ok(response),
        Err(err) => {
            error!(request_id = %ctx.request_id, error = %err, "イベント処理失敗");
            Err(err.into())
        }
    }
}
